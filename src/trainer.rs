//! Fits the power output model on the historical observations.
//!
//! The model is a single-predictor ordinary least squares regression of
//! power output against solar irradiance. Fitting is one streaming pass
//! over the samples: only the sufficient statistics are accumulated, never
//! the raw sample set.

pub mod dataset;
pub mod model;
pub mod regression;
pub mod sample;

use crate::prelude::*;
use crate::tracing::format_elapsed;
use crate::trainer::model::Model;
use crate::trainer::regression::Regression;
use crate::trainer::sample::Sample;

/// Fits a fresh model on the given samples.
///
/// Each call starts from zeroed accumulators, so re-fitting on a new sample
/// sequence carries nothing over from a previous fit.
///
/// Returns [`None`] when the sample set is degenerate: fewer than two
/// samples, or no variance in irradiance.
#[instrument(skip_all, fields(n_samples = samples.len()))]
pub fn fit(samples: &[Sample]) -> Option<Regression> {
    let start_instant = Instant::now();

    let mut model = Model::default();
    for sample in samples {
        model.push(sample);
    }

    let regression = model.finalise();
    match &regression {
        Some(regression) => {
            info!(
                k = regression.k,
                bias = regression.bias,
                elapsed = format_elapsed(start_instant).as_str(),
                "fitted",
            );
        }
        None => {
            warn!("not enough variance in the training data, the model is unfit");
        }
    }
    regression
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_exact_line_ok() {
        let samples = [
            Sample { irradiance: 1.0, power_output: 2.0 },
            Sample { irradiance: 2.0, power_output: 4.0 },
            Sample { irradiance: 3.0, power_output: 6.0 },
        ];
        let regression = fit(&samples).unwrap();
        assert!((regression.k - 2.0).abs() < 1e-12);
        assert!(regression.bias.abs() < 1e-12);
        assert!((regression.predict(4.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn fit_empty_ok() {
        assert!(fit(&[]).is_none());
    }

    #[test]
    fn refit_discards_previous_ok() {
        let first = [
            Sample { irradiance: 1.0, power_output: 2.0 },
            Sample { irradiance: 2.0, power_output: 4.0 },
        ];
        let second = [
            Sample { irradiance: 1.0, power_output: 11.0 },
            Sample { irradiance: 2.0, power_output: 12.0 },
        ];

        fit(&first).unwrap();
        let regression = fit(&second).unwrap();

        assert!((regression.k - 1.0).abs() < 1e-12);
        assert!((regression.bias - 10.0).abs() < 1e-12);
    }
}
