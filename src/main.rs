//! Scatterify - CSV Feature Scatter Plots
//!
//! Loads labeled feature tables and saves one scatter plot per table,
//! colored and styled by class label.

mod charts;
mod data;

use anyhow::Context;
use charts::ScatterRenderer;
use data::TableLoader;

const GOOD_FEATURES_CSV: &str = "good_features.csv";
const BAD_FEATURES_CSV: &str = "bad_features.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let good = TableLoader::load(GOOD_FEATURES_CSV)
        .with_context(|| format!("loading {GOOD_FEATURES_CSV}"))?;
    let plot = ScatterRenderer::render(
        &good,
        "Feature2",
        "Feature1",
        "Scatter Plot: Good Features (Feature2 vs Feature1, TITANIC DATASET)",
    )?;
    ScatterRenderer::show(&plot);

    let bad = TableLoader::load(BAD_FEATURES_CSV)
        .with_context(|| format!("loading {BAD_FEATURES_CSV}"))?;
    let plot = ScatterRenderer::render(
        &bad,
        "Feature3",
        "Feature6",
        "Scatter Plot: Bad Features (Feature3 vs Feature6, TITANIC DATASET)",
    )?;
    ScatterRenderer::show(&plot);

    Ok(())
}
