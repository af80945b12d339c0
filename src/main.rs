mod opts;
mod prelude;
mod tracing;
mod trainer;
mod web;

use crate::opts::{FitOpts, Subcommand};
use crate::prelude::*;
use crate::trainer::dataset::Dataset;

#[tokio::main]
async fn main() -> Result {
    let opts = opts::parse();
    crate::tracing::init()?;
    match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Fit(opts) => fit(opts),
    }
}

/// Fits the model once and prints the coefficients to the standard output.
fn fit(opts: FitOpts) -> Result {
    let dataset = Dataset::load(&opts.training.training_data)?;
    match trainer::fit(&dataset.samples) {
        Some(regression) => {
            println!("{}", serde_json::to_string(&regression)?);
            Ok(())
        }
        None => Err(anyhow!("not enough variance in the training data to fit the model")),
    }
}
