use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PredictRequest {
    pub radiation: f64,
}
