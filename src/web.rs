//! The serving layer.
//!
//! Training happens once, before the listener starts accepting traffic.
//! The fitted coefficients are installed into the application as shared
//! immutable data, so the prediction handler is a pure function of the
//! frozen model and the request.

pub mod middleware;
pub mod requests;
pub mod responses;

use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;

use poem::http::StatusCode;
use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::web::{Data, Json};
use poem::{get, handler, post, Endpoint, EndpointExt, IntoResponse, Response, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::trainer;
use crate::trainer::dataset::Dataset;
use crate::trainer::regression::Regression;
use crate::web::middleware::ErrorMiddleware;
use crate::web::requests::PredictRequest;
use crate::web::responses::{ErrorResponse, PredictResponse};

pub async fn run(opts: WebOpts) -> Result {
    let model = train(&opts.training.training_data);
    let app = create_app(model, &opts.allowed_origins);
    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), None)
        .await?;
    Ok(())
}

/// Loads the training data and fits the model.
///
/// Serving starts regardless of the outcome: without a usable model the
/// prediction endpoint keeps answering, with an error payload.
fn train(path: &Path) -> Option<Regression> {
    match Dataset::load(path) {
        Ok(dataset) => trainer::fit(&dataset.samples),
        Err(error) => {
            error!("failed to load the training data: {:#}", error);
            None
        }
    }
}

fn create_app(model: Option<Regression>, allowed_origins: &[String]) -> impl Endpoint {
    let mut cors = Cors::new();
    for origin in allowed_origins {
        cors = cors.allow_origin(origin);
    }
    Route::new()
        .at("/api/predict", post(predict))
        .at("/api/health", get(get_health))
        .data(model)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(cors)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
    }
}

#[handler]
#[instrument(level = "info", skip_all)]
async fn predict(
    Json(request): Json<PredictRequest>,
    Data(model): Data<&Option<Regression>>,
) -> Response {
    let regression = match model {
        Some(regression) => regression,
        None => {
            warn!("prediction requested while the model is unfit");
            return Json(ErrorResponse::new("the model is not fitted"))
                .with_status(StatusCode::SERVICE_UNAVAILABLE)
                .into_response();
        }
    };

    let power_output = regression.predict(request.radiation);
    info!(radiation = request.radiation, power_output, "predicted");
    Json(PredictResponse { power_output }).into_response()
}

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "info")]
async fn get_health() -> Result<impl IntoResponse> {
    Ok(Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL))
}

#[cfg(test)]
mod tests {
    use poem::test::TestClient;

    use super::*;

    fn fitted_app() -> impl Endpoint {
        create_app(Some(Regression { k: 2.0, bias: 0.0 }), &[])
    }

    #[tokio::test]
    async fn predict_ok() {
        let client = TestClient::new(fitted_app());
        let response = client
            .post("/api/predict")
            .body_json(&PredictRequest { radiation: 4.0 })
            .send()
            .await;
        response.assert_status_is_ok();

        let json = response.json().await;
        let power_output = json.value().object().get("powerOutput").f64();
        assert!((power_output - 8.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn predict_unfit_ok() {
        let client = TestClient::new(create_app(None, &[]));
        let response = client
            .post("/api/predict")
            .body_json(&PredictRequest { radiation: 4.0 })
            .send()
            .await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let json = response.json().await;
        assert_eq!(json.value().object().get("error").string(), "the model is not fitted");
    }

    #[tokio::test]
    async fn predict_malformed_body_ok() {
        let client = TestClient::new(fitted_app());
        let response = client
            .post("/api/predict")
            .content_type("application/json")
            .body("radiation")
            .send()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_ok() {
        let client = TestClient::new(fitted_app());
        let response = client.get("/api/health").send().await;
        response.assert_status(StatusCode::NO_CONTENT);
    }
}
