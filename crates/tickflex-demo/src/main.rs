// File: crates/tickflex-demo/src/main.rs
// Summary: Demo loads a category/dataset CSV, derives or checks a scale, and prints axes + chart layouts.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tickflex_core::axis::AxisUnit;
use tickflex_core::bar::StackPiece;
use tickflex_core::{
    generate_scale, resolve_range, Axes, AxesLayout, BarChart, BarChartLayout, BarGroups, Dataset, DisplayMode,
    LineChart, LineChartLayout, LineSlot, Orientation, Scale, ValueAxisMode,
};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    scale: Option<Scale>,
    stacked: bool,
    horizontal: bool,
    inverted: bool,
    line: bool,
    area: bool,
    json: bool,
    verbose: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ChartLayout {
    Bar(BarChartLayout),
    Line(LineChartLayout),
}

#[derive(Serialize)]
struct Report<'a> {
    scale: Scale,
    generated: bool,
    axes: &'a AxesLayout,
    chart: &'a ChartLayout,
}

fn main() -> Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;
    init_logging(opts.verbose);

    let path = resolve_path(opts.input.as_deref())?;
    let (categories, datasets) = load_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(categories = categories.len(), datasets = datasets.len(), "loaded {}", path.display());

    if datasets.is_empty() {
        anyhow::bail!("no dataset columns found in {}", path.display());
    }

    let (scale, generated) = match opts.scale {
        Some(s) => (s, false),
        None => {
            let range = resolve_range(&datasets, opts.stacked)
                .with_context(|| format!("no values in {} to derive a scale from", path.display()))?;
            debug!(?range, "derived range");
            (generate_scale(range)?, true)
        }
    };

    let orientation = if opts.horizontal { Orientation::Horizontal } else { Orientation::Vertical };
    let value_mode = if opts.inverted { ValueAxisMode::Inverted } else { ValueAxisMode::Normal };

    let axes = Axes::new(scale, categories)
        .orientation(orientation)
        .value_axis_mode(value_mode)
        .layout()
        .context("axes layout")?;

    let chart = if opts.line {
        let layout = LineChart::new(datasets, scale)
            .value_axis_mode(value_mode)
            .show_area(opts.area)
            .layout()
            .context("line chart layout")?;
        ChartLayout::Line(layout)
    } else {
        let mode = if opts.stacked { DisplayMode::Stacked } else { DisplayMode::Clustered };
        let layout = BarChart::new(datasets, scale)
            .orientation(orientation)
            .display_mode(mode)
            .layout()
            .context("bar chart layout")?;
        ChartLayout::Bar(layout)
    };

    if opts.json {
        let report = Report { scale, generated, axes: &axes, chart: &chart };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&scale, generated, &axes, &chart);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut opts = Options::default();
    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stacked" => opts.stacked = true,
            "--horizontal" => opts.horizontal = true,
            "--inverted" => opts.inverted = true,
            "--line" => opts.line = true,
            "--area" => {
                opts.line = true;
                opts.area = true;
            }
            "--json" => opts.json = true,
            "-v" | "--verbose" => opts.verbose = true,
            "--scale" => {
                let raw = args.next().context("--scale expects min,max,unit")?;
                opts.scale = Some(parse_scale(&raw)?);
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown flag: {flag}"),
            _ => opts.input = Some(PathBuf::from(arg)),
        }
    }
    Ok(opts)
}

fn parse_scale(raw: &str) -> Result<Scale> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>().with_context(|| format!("bad scale component '{p}'")))
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [min, max, unit] => Ok(Scale::new(*min, *max, *unit)),
        _ => anyhow::bail!("--scale expects exactly three numbers, got '{raw}'"),
    }
}

/// Input path as given, or relative to this crate when run from elsewhere;
/// defaults to the bundled sample.
fn resolve_path(raw: Option<&Path>) -> Result<PathBuf> {
    let p = raw.unwrap_or_else(|| Path::new("data/sample.csv"));
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join(p);
    if p.is_relative() && alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a CSV whose first column holds category labels and whose remaining
/// columns are datasets named by their header. Empty or unparsable cells are
/// missing samples.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<Dataset>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let mut datasets = headers
        .iter()
        .skip(1)
        .map(|h| Dataset::new(Vec::new()).with_name(h.clone()))
        .collect::<Vec<_>>();
    let mut categories = Vec::new();

    for rec in rdr.records() {
        let rec = rec?;
        categories.push(rec.get(0).unwrap_or_default().trim().to_string());
        for (i, dataset) in datasets.iter_mut().enumerate() {
            let sample = rec.get(i + 1).and_then(|s| s.trim().parse::<f64>().ok());
            dataset.values.push(sample);
        }
    }
    Ok((categories, datasets))
}

fn print_text(scale: &Scale, generated: bool, axes: &AxesLayout, chart: &ChartLayout) {
    println!(
        "Scale: min {} max {} unit {}{}",
        scale.min,
        scale.max,
        scale.unit,
        if generated { " (generated)" } else { "" }
    );
    for (name, axis) in [("x", &axes.x), ("y", &axes.y)] {
        let slots = axis
            .labels
            .iter()
            .zip(&axis.label_slots)
            .map(|(label, slot)| match slot {
                AxisUnit::Flex(w) => format!("{label}[{w}]"),
                AxisUnit::Fixed => format!("{label}[fixed]"),
            })
            .collect::<Vec<_>>();
        println!("Axis {name} ({:?}): {}", axis.role, slots.join(" "));
    }

    match chart {
        ChartLayout::Bar(layout) => match &layout.groups {
            BarGroups::Clustered(clusters) => {
                for (i, cluster) in clusters.iter().enumerate() {
                    println!("Cluster {i}:");
                    for bar in &cluster.bars {
                        println!(
                            "  {:<12} value {:>10} +{:.3} -{:.3} empty {:.3}",
                            bar.name.as_deref().unwrap_or("-"),
                            fmt_value(bar.value),
                            bar.ratios.positive,
                            bar.ratios.negative,
                            bar.ratios.empty
                        );
                    }
                }
            }
            BarGroups::Stacked(stacks) => {
                for (i, stack) in stacks.iter().enumerate() {
                    println!("Stack {i}: total {:.3}", stack.total_ratio);
                    for piece in &stack.pieces {
                        match piece {
                            StackPiece::Empty { ratio } => println!("  (empty)      {ratio:.3}"),
                            StackPiece::Segment { name, value, ratio, .. } => println!(
                                "  {:<12} value {:>10} {:.3}",
                                name.as_deref().unwrap_or("-"),
                                fmt_value(*value),
                                ratio
                            ),
                        }
                    }
                }
            }
        },
        ChartLayout::Line(layout) => {
            for series in &layout.series {
                println!("Series {} (flex {}):", series.name.as_deref().unwrap_or("-"), series.flex);
                for (i, slot) in series.slots.iter().enumerate() {
                    match slot {
                        LineSlot::Gap => println!("  {i}: gap"),
                        LineSlot::Suppressed => println!("  {i}: suppressed"),
                        LineSlot::Segment { ratios, points } => println!(
                            "  {i}: {:.3} -> {} points {:?}",
                            ratios.from,
                            ratios.to.map(|t| format!("{t:.3}")).unwrap_or_else(|| "open".to_string()),
                            points
                        ),
                    }
                }
            }
        }
    }
}

fn fmt_value(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "missing".to_string())
}
