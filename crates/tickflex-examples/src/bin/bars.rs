// File: crates/tickflex-examples/src/bin/bars.rs
// Summary: Minimal example that auto-scales two datasets and prints bar + axes layouts as JSON.

use anyhow::{Context, Result};
use tickflex_core::{generate_scale, resolve_range, Axes, BarChart, Dataset, DisplayMode};

fn main() -> Result<()> {
    let datasets = vec![
        Dataset::from_values([4.0, 7.5, 3.0, 9.0]).with_name("2023"),
        Dataset::new(vec![Some(5.0), None, Some(6.0), Some(-2.0)]).with_name("2024"),
    ];
    let labels = ["Q1", "Q2", "Q3", "Q4"].map(String::from).to_vec();

    let range = resolve_range(&datasets, false).context("datasets have no values")?;
    let scale = generate_scale(range)?;

    let axes = Axes::new(scale, labels).layout()?;
    let bars = BarChart::new(datasets, scale)
        .display_mode(DisplayMode::Clustered)
        .cluster_spacing(4.0)
        .layout()?;

    let json = serde_json::json!({ "scale": scale, "axes": axes, "bars": bars });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
