use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fleetroute_core::pipeline::RouteReport;
use tracing::info;

use crate::file_utils::write_json;

#[derive(Args)]
pub struct OutputArgs {
    /// Write the map layer as a GeoJSON FeatureCollection
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Write the full report (totals, segments and map layer) as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Whole kilometres, ties away from zero (2.5 km reads "3").
fn format_km(km: f64) -> String {
    format!("{:.0}", km.round())
}

fn segments_table(report: &RouteReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Start", "End", "Km", "Points"]);

    for (index, segment) in report.route.segments().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            segment.start_time().unwrap_or("-").to_string(),
            segment.end_time().unwrap_or("-").to_string(),
            format!("{:.1}", segment.distance().to_kilometers()),
            segment.decoded_points().len().to_string(),
        ]);
    }

    table
}

pub fn emit(report: &RouteReport, args: &OutputArgs) -> Result<(), anyhow::Error> {
    if let Some(out) = &args.out {
        write_json(out, &report.map)?;
        info!("Map layer written to {:?}", out);
    }

    if let Some(out) = &args.report {
        write_json(out, report)?;
        info!("Report written to {:?}", out);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("No driving in this period");
        return Ok(());
    }

    println!("{}", segments_table(report));
    println!(
        "{} Km Driven    {} Driving Time",
        format_km(report.route.total_distance_km()),
        report.route.total_duration()
    );

    if let Some(center) = report.geometry.center() {
        println!("Map center: {:.5}, {:.5}", center.y(), center.x());
    }

    Ok(())
}
