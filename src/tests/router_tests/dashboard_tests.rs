// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::locale::Locale;
use crate::router::handle;
use crate::domain::classify;
use crate::state::AppState;
use crate::tests::utils::{body_string, days, sample_records, test_state, today, SharedClock};
use astra::Body;
use http::{Method, Request};

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn dashboard_lists_campaigns_under_their_tabs() {
    let state = test_state(Locale::En);

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Upcoming Campaigns"));
    assert!(body.contains("Live Campaigns"));
    assert!(body.contains("Past Campaigns"));

    // each name shows up inside its own panel
    let upcoming = body.find("panel-upcoming").unwrap();
    let live = body.find("panel-live").unwrap();
    let past = body.find("panel-past").unwrap();
    let launch = body.find("Launch").unwrap();
    let mega = body.find("Mega Weekend").unwrap();
    let spring = body.find("Spring Jackpot").unwrap();
    assert!(upcoming < launch && launch < live);
    assert!(live < mega && mega < past);
    assert!(past < spring);

    assert!(body.contains("in 2 days"));
    assert!(body.contains("3 days ago"));
    assert!(body.contains("/campaigns/live/0/pricing"));
    assert!(body.contains("/campaigns/past/0/reschedule"));
}

#[test]
fn dashboard_uses_french_locale() {
    let state = test_state(Locale::Fr);

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("lang=\"fr\""));
    assert!(body.contains("Campagnes en cours"));
    assert!(body.contains("19/10/2026"));
    assert!(body.contains("dans 2 jours"));
    assert!(body.contains("Voir les tarifs"));
    assert!(body.contains("Reprogrammer"));
    assert!(!body.contains("Schedule Again"));
}

#[test]
fn campaigns_api_exposes_buckets() {
    let state = test_state(Locale::En);

    let resp = handle(get("/api/campaigns"), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();

    assert_eq!(json["upcoming"][0]["name"], "Launch");
    assert_eq!(json["upcoming"][0]["timeDiff"], 2);
    assert_eq!(json["upcoming"][0]["type"], "upcoming");
    assert_eq!(json["live"][0]["name"], "Mega Weekend");
    assert_eq!(json["live"][0]["timeDiff"], 0);
    assert_eq!(json["live"][0]["type"], "live");
    assert_eq!(json["past"][0]["timeDiff"], -3);
    assert_eq!(json["past"][0]["type"], "past");
}

#[test]
fn campaigns_api_follows_the_clock() {
    let clock = SharedClock::new(today());
    let state = AppState::new(
        classify(sample_records(), today()),
        Box::new(clock.clone()),
        Locale::En,
    );

    clock.advance(days(1));

    let json: serde_json::Value =
        serde_json::from_str(&body_string(handle(get("/api/campaigns"), &state).unwrap())).unwrap();

    assert_eq!(json["live"], serde_json::json!([]));
    assert_eq!(json["upcoming"][0]["name"], "Launch");
    assert_eq!(json["upcoming"][0]["timeDiff"], 1);
    assert_eq!(json["past"][0]["name"], "Mega Weekend");
    assert_eq!(json["past"][0]["timeDiff"], -1);
    assert_eq!(json["past"][0]["type"], "past");
    assert_eq!(json["past"][1]["name"], "Spring Jackpot");
    assert_eq!(json["past"][1]["timeDiff"], -4);

    // the page view agrees with the API
    let page = body_string(handle(get("/"), &state).unwrap());
    assert!(page.contains("1 day ago"));
    let again: serde_json::Value =
        serde_json::from_str(&body_string(handle(get("/api/campaigns"), &state).unwrap())).unwrap();
    assert_eq!(json, again);
}

#[test]
fn stylesheet_is_served() {
    let state = test_state(Locale::En);

    let resp = handle(get("/static/main.css"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".tab-panel"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(Locale::En);

    assert!(matches!(
        handle(get("/admin"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn errors_render_with_matching_status() {
    use crate::responses::html_error_response;

    assert_eq!(html_error_response(ServerError::NotFound, Locale::En).status(), 404);
    assert_eq!(
        html_error_response(ServerError::InternalError, Locale::En).status(),
        500
    );
    assert_eq!(
        html_error_response(ServerError::Conflict("stale".into()), Locale::En).status(),
        409
    );

    let resp = html_error_response(
        ServerError::BadRequest("missing created_on".into()),
        Locale::En,
    );
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing created_on"));
}

#[test]
fn error_page_follows_locale() {
    use crate::responses::html_error_response;

    let body = body_string(html_error_response(ServerError::NotFound, Locale::Fr));

    assert!(body.contains("lang=\"fr\""));
    assert!(body.contains("Erreur 404"));
    assert!(body.contains("Retour au tableau de bord"));
}
