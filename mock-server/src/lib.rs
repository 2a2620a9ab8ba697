use std::{sync::Arc, time::Instant};

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use zxcvbn::time_estimates::CrackTimeSeconds;

/// Four values, one per attack scenario, under their wire keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTimes<T> {
    pub online_throttling_100_per_hour: T,
    pub online_no_throttling_10_per_second: T,
    pub offline_slow_hashing_1e4_per_second: T,
    pub offline_fast_hashing_1e10_per_second: T,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub warning: String,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthResponse {
    pub guesses: f64,
    pub guesses_log10: f64,
    pub crack_times_seconds: ScenarioTimes<f64>,
    pub crack_times_display: ScenarioTimes<String>,
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackResponse>,
    pub calc_time: u64,
}

#[derive(Deserialize)]
pub struct PasswordForm {
    pub password: String,
}

/// How the server answers `POST /zxcvbn`.
#[derive(Clone, Debug)]
pub enum Estimator {
    /// Estimate with the zxcvbn crate.
    Zxcvbn,
    /// Always answer with this status and JSON body.
    Canned { status: u16, body: String },
    /// Answer with `307 Temporary Redirect` to `location`.
    Redirect { location: String },
}

pub type Received = Arc<RwLock<Vec<String>>>;

#[derive(Clone, Debug)]
pub struct AppState {
    pub estimator: Estimator,
    /// Every password the server has accepted, in arrival order.
    pub received: Received,
}

impl AppState {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn canned(status: u16, body: impl Into<String>) -> Self {
        Self::new(Estimator::Canned {
            status,
            body: body.into(),
        })
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::new(Estimator::Redirect {
            location: location.into(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Estimator::Zxcvbn)
    }
}

pub fn app() -> Router {
    app_with(AppState::default())
}

pub fn app_with(state: AppState) -> Router {
    Router::new()
        .route("/zxcvbn", post(estimate))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, AppState::default()).await
}

pub async fn run_with(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

async fn estimate(
    State(state): State<AppState>,
    form: Result<Form<PasswordForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!(%rejection, "rejected estimate request");
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };
    if form.password.is_empty() {
        warn!("rejected empty password");
        return (StatusCode::BAD_REQUEST, "password must not be empty").into_response();
    }
    state.received.write().await.push(form.password.clone());

    match state.estimator {
        Estimator::Zxcvbn => {
            let strength = estimate_with_zxcvbn(&form.password);
            info!(
                score = strength.score,
                calc_time = strength.calc_time,
                "estimated password strength"
            );
            Json(strength).into_response()
        }
        Estimator::Canned { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Estimator::Redirect { location } => {
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
        }
    }
}

pub fn estimate_with_zxcvbn(password: &str) -> StrengthResponse {
    let started = Instant::now();
    let entropy = zxcvbn::zxcvbn(password, &[]);
    let times = entropy.crack_times();
    let scenarios = [
        times.online_throttling_100_per_hour(),
        times.online_no_throttling_10_per_second(),
        times.offline_slow_hashing_1e4_per_second(),
        times.offline_fast_hashing_1e10_per_second(),
    ];
    let [e, f, g, h] = scenarios.each_ref().map(|t| t.to_string());
    let [a, b, c, d] = scenarios.map(seconds);

    StrengthResponse {
        guesses: entropy.guesses() as f64,
        guesses_log10: entropy.guesses_log10(),
        crack_times_seconds: ScenarioTimes {
            online_throttling_100_per_hour: a,
            online_no_throttling_10_per_second: b,
            offline_slow_hashing_1e4_per_second: c,
            offline_fast_hashing_1e10_per_second: d,
        },
        crack_times_display: ScenarioTimes {
            online_throttling_100_per_hour: e,
            online_no_throttling_10_per_second: f,
            offline_slow_hashing_1e4_per_second: g,
            offline_fast_hashing_1e10_per_second: h,
        },
        score: entropy.score() as u8,
        feedback: entropy.feedback().map(|feedback| FeedbackResponse {
            warning: feedback.warning().map(|w| w.to_string()).unwrap_or_default(),
            suggestions: feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        }),
        calc_time: started.elapsed().as_millis() as u64,
    }
}

fn seconds(time: CrackTimeSeconds) -> f64 {
    match time {
        CrackTimeSeconds::Integer(n) => n as f64,
        CrackTimeSeconds::Float(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_password_has_feedback() {
        let strength = estimate_with_zxcvbn("password");
        assert_eq!(strength.score, 0);
        let feedback = strength.feedback.unwrap();
        assert!(!feedback.suggestions.is_empty());
    }

    #[test]
    fn strong_password_has_no_feedback() {
        let strength = estimate_with_zxcvbn("98p23uijafjj--ah77yhfraklhjaza!?a3");
        assert_eq!(strength.score, 4);
        assert!(strength.feedback.is_none());
    }

    #[test]
    fn crack_times_shrink_as_attack_rate_grows() {
        let t = estimate_with_zxcvbn("Tr0ub4dour&3").crack_times_seconds;
        assert!(t.online_throttling_100_per_hour >= t.online_no_throttling_10_per_second);
        assert!(t.online_no_throttling_10_per_second >= t.offline_slow_hashing_1e4_per_second);
        assert!(t.offline_slow_hashing_1e4_per_second >= t.offline_fast_hashing_1e10_per_second);
    }

    #[test]
    fn response_serializes_wire_keys() {
        let json = serde_json::to_value(estimate_with_zxcvbn("password")).unwrap();
        for key in [
            "guesses",
            "guesses_log10",
            "crack_times_seconds",
            "crack_times_display",
            "score",
            "feedback",
            "calc_time",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["crack_times_display"]["offline_fast_hashing_1e10_per_second"].is_string());
    }

    #[test]
    fn strong_response_omits_feedback_key() {
        let json = serde_json::to_value(estimate_with_zxcvbn("98p23uijafjj--ah77yhfraklhjaza!?a3")).unwrap();
        assert!(json.get("feedback").is_none());
    }

    #[test]
    fn password_form_rejects_missing_field() {
        let result: Result<PasswordForm, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
