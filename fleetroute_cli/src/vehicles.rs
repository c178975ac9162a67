use comfy_table::{Table, presets::UTF8_FULL};
use fleetroute_mapon::{mapon_api::MaponClient, telemetry_source::TelemetrySource};

pub async fn run() -> anyhow::Result<()> {
    let client = MaponClient::from_env()?;
    let mut vehicles = client.fetch_vehicles().await?;
    vehicles.sort_by(|a, b| a.display_name().cmp(b.display_name()));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Vehicle", "Unit id", "Label"]);

    for vehicle in &vehicles {
        table.add_row(vec![
            vehicle.display_name().to_string(),
            vehicle.unit_id.to_string(),
            vehicle.label.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");

    Ok(())
}
