use crate::config::parse_day;
use crate::domain::{to_rows, Bucket, CampaignBoard};
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, json_response, redirect_response, ResultResp,
};
use crate::state::AppState;
use crate::templates::{self, pages};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => dashboard(state),
        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),
        ("GET", ["api", "campaigns"]) => with_fresh_board(state, |board| json_response(board)),
        ("GET", ["api", "campaigns", bucket, index, "pricing"]) => {
            let (bucket, index) = parse_slot(bucket, index)?;
            let rows = state.with_board(|board| {
                Ok(to_rows(board.get(bucket, index)?.record.price.as_ref()))
            })?;
            json_response(&rows)
        }
        ("GET", ["campaigns", bucket, index, "pricing"]) => {
            let (bucket, index) = parse_slot(bucket, index)?;
            pricing(state, bucket, index, is_htmx(&req))
        }
        ("POST", ["campaigns", bucket, index, "reschedule"]) => {
            let (bucket, index) = parse_slot(bucket, index)?;
            let form = parse_form(&mut req)?;
            reschedule(state, bucket, index, &form)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Whole-board reads re-bucket against the current "today" first.
fn with_fresh_board<F>(state: &AppState, f: F) -> ResultResp
where
    F: FnOnce(&CampaignBoard) -> ResultResp,
{
    let today = state.today();

    state.with_board(|board| {
        board.refresh(today);
        f(board)
    })
}

fn dashboard(state: &AppState) -> ResultResp {
    let today = state.today();

    with_fresh_board(state, |board| {
        html_response(pages::dashboard_page(&pages::DashboardVm {
            board,
            locale: state.locale,
            today,
        }))
    })
}

fn pricing(state: &AppState, bucket: Bucket, index: usize, fragment: bool) -> ResultResp {
    let campaign = state.with_board(|board| Ok(board.get(bucket, index)?.clone()))?;

    let vm = pages::PricingVm {
        campaign,
        locale: state.locale,
    };
    let popup = pages::pricing_popup(&vm);

    if fragment {
        html_response(popup)
    } else {
        html_response(templates::desktop_layout(
            &vm.campaign.record.name,
            state.locale,
            popup,
        ))
    }
}

fn reschedule(
    state: &AppState,
    bucket: Bucket,
    index: usize,
    form: &HashMap<String, String>,
) -> ResultResp {
    let raw = form
        .get("created_on")
        .ok_or_else(|| ServerError::BadRequest("missing created_on".into()))?;
    let created_on = parse_day(raw).map_err(ServerError::BadRequest)?;
    // createdOn (ms) of the campaign the form was rendered for
    let expected = form
        .get("current")
        .map(|raw| raw.parse::<i64>())
        .transpose()
        .map_err(|_| ServerError::BadRequest("bad current stamp".into()))?;
    let today = state.today();

    state.with_board(|board| {
        let found = board.get(bucket, index)?.record.created_on.timestamp_millis();
        if expected.is_some_and(|ms| ms != found) {
            return Err(ServerError::Conflict(format!(
                "campaign at {bucket}/{index} changed since the page was loaded"
            )));
        }
        board.set_created_on(bucket, index, created_on)?;
        board.reschedule(bucket, index, today)?;
        Ok(())
    })?;

    redirect_response("/")
}

/// `/campaigns/{bucket}/{index}/...` path segments. Anything unparseable is a 404.
fn parse_slot(bucket: &str, index: &str) -> Result<(Bucket, usize), ServerError> {
    let bucket = bucket.parse::<Bucket>().map_err(|_| ServerError::NotFound)?;
    let index = index.parse::<usize>().map_err(|_| ServerError::NotFound)?;
    Ok((bucket, index))
}

fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("hx-request")
}

/// application/x-www-form-urlencoded body -> map.
fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
