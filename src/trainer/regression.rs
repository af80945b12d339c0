use serde::{Deserialize, Serialize};

/// Fitted least squares line.
///
/// Only produced by a successful fit, and immutable afterwards: concurrent
/// predictions need no locking.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Regression {
    /// Slope: predicted power output per unit of irradiance.
    pub k: f64,

    /// Intercept.
    pub bias: f64,
}

impl Regression {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.k * x + self.bias
    }
}
