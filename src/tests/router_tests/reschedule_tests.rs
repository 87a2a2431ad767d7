// src/tests/router_tests/reschedule_tests.rs

use crate::domain::Bucket;
use crate::errors::ServerError;
use crate::locale::Locale;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, test_state, today};
use astra::Body;
use http::{Method, Request};

fn post_form(path: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn names(state: &AppState, bucket: Bucket) -> Vec<String> {
    state
        .with_board(|board| {
            Ok(board
                .bucket(bucket)
                .iter()
                .map(|c| c.record.name.clone())
                .collect())
        })
        .unwrap()
}

#[test]
fn rescheduling_live_campaign_into_future_moves_it() {
    let state = test_state(Locale::En);

    let resp = handle(
        post_form("/campaigns/live/0/reschedule", "created_on=2026-10-25"),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302, "Should redirect after reschedule");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    assert!(names(&state, Bucket::Live).is_empty());
    assert_eq!(names(&state, Bucket::Upcoming), vec!["Launch", "Mega Weekend"]);

    let diff = state
        .with_board(|board| Ok(board.bucket(Bucket::Upcoming)[1].time_diff))
        .unwrap();
    assert_eq!(diff, 6);
}

#[test]
fn rescheduling_within_bucket_keeps_membership() {
    let state = test_state(Locale::En);

    let resp = handle(
        post_form("/campaigns/past/0/reschedule", "created_on=2026-10-01"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    assert_eq!(names(&state, Bucket::Past), vec!["Spring Jackpot"]);
    let diff = state
        .with_board(|board| Ok(board.bucket(Bucket::Past)[0].time_diff))
        .unwrap();
    assert_eq!(diff, -18);
}

#[test]
fn rescheduling_to_today_goes_live() {
    let state = test_state(Locale::En);

    handle(
        post_form("/campaigns/upcoming/0/reschedule", "created_on=2026-10-19"),
        &state,
    )
    .unwrap();

    assert_eq!(names(&state, Bucket::Live), vec!["Mega Weekend", "Launch"]);
    assert!(names(&state, Bucket::Upcoming).is_empty());
}

#[test]
fn bad_form_is_rejected_without_changes() {
    let state = test_state(Locale::En);

    for form in ["", "date=2026-10-25", "created_on=25%2F10%2F2026", "created_on=%zz"] {
        let result = handle(post_form("/campaigns/live/0/reschedule", form), &state);
        assert!(
            matches!(result, Err(ServerError::BadRequest(_))),
            "form {form:?} should be rejected"
        );
    }

    assert_eq!(names(&state, Bucket::Live), vec!["Mega Weekend"]);
}

#[test]
fn rescheduling_missing_campaign_is_not_found() {
    let state = test_state(Locale::En);

    let result = handle(
        post_form("/campaigns/upcoming/4/reschedule", "created_on=2026-10-25"),
        &state,
    );

    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(names(&state, Bucket::Upcoming), vec!["Launch"]);
}

#[test]
fn form_values_are_url_decoded() {
    let state = test_state(Locale::En);

    let resp = handle(
        post_form("/campaigns/live/0/reschedule", "created%5Fon=+2026-10-25+&extra=a%26b"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(names(&state, Bucket::Upcoming), vec!["Launch", "Mega Weekend"]);
}

#[test]
fn dashboard_form_carries_current_date_stamp() {
    let state = test_state(Locale::En);
    let get = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(get, &state).unwrap());

    assert!(body.contains(&format!(
        "name=\"current\" value=\"{}\"",
        today().timestamp_millis()
    )));
}

#[test]
fn stale_form_is_a_conflict_without_changes() {
    let state = test_state(Locale::En);
    // the stamp of a campaign that is no longer at live/0
    let stale = (today() - chrono::Duration::days(3)).timestamp_millis();

    let result = handle(
        post_form(
            "/campaigns/live/0/reschedule",
            &format!("created_on=2026-10-25&current={stale}"),
        ),
        &state,
    );

    assert!(matches!(result, Err(ServerError::Conflict(_))));
    assert_eq!(names(&state, Bucket::Live), vec!["Mega Weekend"]);

    let resp = handle(
        post_form(
            "/campaigns/live/0/reschedule",
            &format!("created_on=2026-10-25&current={}", today().timestamp_millis()),
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert!(names(&state, Bucket::Live).is_empty());
}

#[test]
fn malformed_stamp_is_a_bad_request() {
    let state = test_state(Locale::En);

    let result = handle(
        post_form("/campaigns/live/0/reschedule", "created_on=2026-10-25&current=soon"),
        &state,
    );

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(names(&state, Bucket::Live), vec!["Mega Weekend"]);
}
