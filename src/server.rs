//! Axum HTTP server: the page flow plus a health probe.
//!
//! Every page is a small stateless handler; the only state between steps
//! is the dice-count cookie managed in [`crate::session`].
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Start page: play or not |
//! | POST | `/start` | Branch to the dice-count form or say goodbye |
//! | GET | `/ask-dice-count` | Dice-count form |
//! | POST | `/set-dice-count` | Validate and store the dice count |
//! | GET | `/ask-target-sum` | Ask whether the player has a target sum |
//! | POST | `/handle-target-sum` | Branch to the sum form or a live roll |
//! | GET | `/ask-target-sum-value` | Target-sum form with valid bounds |
//! | POST | `/show-probability` | Validate the sum, show its probability |
//! | GET | `/roll` | Roll the dice, show results and their odds |
//! | POST | `/play-again` | Back to the dice-count form or goodbye |
//! | GET | `/health` | Health check |

use axum::{
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use tower_cookies::{CookieManagerLayer, Cookies};
use tower_http::trace::TraceLayer;

use crate::constants::{max_sum, min_sum};
use crate::dice_mechanics::roll_dice;
use crate::input::{parse_dice_count, parse_target_sum};
use crate::pages;
use crate::probability::probability_of_sum;
use crate::session;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/start", post(handle_start))
        .route("/ask-dice-count", get(handle_ask_dice_count))
        .route("/set-dice-count", post(handle_set_dice_count))
        .route("/ask-target-sum", get(handle_ask_target_sum))
        .route("/handle-target-sum", post(handle_target_sum_choice))
        .route("/ask-target-sum-value", get(handle_ask_target_sum_value))
        .route("/show-probability", post(handle_show_probability))
        .route("/roll", get(handle_roll))
        .route("/play-again", post(handle_play_again))
        .route("/health", get(handle_health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
}

// ── Form payloads ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChoiceForm {
    #[serde(default)]
    choice: String,
}

impl ChoiceForm {
    fn is_yes(&self) -> bool {
        self.choice == "Yes"
    }
}

#[derive(Deserialize)]
struct DiceCountForm {
    #[serde(default)]
    dice_count: String,
}

#[derive(Deserialize)]
struct TargetSumForm {
    #[serde(default)]
    target_sum: String,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_index() -> Html<String> {
    Html(pages::index())
}

async fn handle_start(Form(form): Form<ChoiceForm>) -> Response {
    if form.is_yes() {
        Redirect::to("/ask-dice-count").into_response()
    } else {
        Html(pages::goodbye()).into_response()
    }
}

async fn handle_ask_dice_count() -> Html<String> {
    Html(pages::ask_dice_count(None))
}

async fn handle_set_dice_count(cookies: Cookies, Form(form): Form<DiceCountForm>) -> Response {
    match parse_dice_count(&form.dice_count) {
        Ok(n) => {
            session::set_dice_count(&cookies, n);
            Redirect::to("/ask-target-sum").into_response()
        }
        Err(err) => Html(pages::ask_dice_count(Some(&err.to_string()))).into_response(),
    }
}

async fn handle_ask_target_sum() -> Html<String> {
    Html(pages::ask_target_sum())
}

async fn handle_target_sum_choice(Form(form): Form<ChoiceForm>) -> Redirect {
    if form.is_yes() {
        Redirect::to("/ask-target-sum-value")
    } else {
        Redirect::to("/roll")
    }
}

async fn handle_ask_target_sum_value(cookies: Cookies) -> Html<String> {
    let n = session::dice_count(&cookies);
    Html(pages::ask_target_sum_value(n, min_sum(n), max_sum(n), None))
}

async fn handle_show_probability(cookies: Cookies, Form(form): Form<TargetSumForm>) -> Response {
    let n = session::dice_count(&cookies);
    match parse_target_sum(&form.target_sum, n) {
        Ok(target) => {
            let res = probability_of_sum(n, target);
            tracing::info!(dice_count = n, target_sum = target, ways = %res.ways_display, "probability query");
            Html(pages::show_probability(n, target, &res)).into_response()
        }
        Err(err) => Html(pages::ask_target_sum_value(
            n,
            min_sum(n),
            max_sum(n),
            Some(&err.to_string()),
        ))
        .into_response(),
    }
}

async fn handle_roll(cookies: Cookies) -> Html<String> {
    let n = session::dice_count(&cookies);
    let roll = roll_dice(n);
    let res = probability_of_sum(n, roll.sum);
    tracing::info!(dice_count = n, sum = roll.sum, "rolled");
    Html(pages::roll_result(n, &roll, &res))
}

async fn handle_play_again(Form(form): Form<ChoiceForm>) -> Response {
    if form.is_yes() {
        Redirect::to("/ask-dice-count").into_response()
    } else {
        Html(pages::goodbye()).into_response()
    }
}
