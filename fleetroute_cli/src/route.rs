use std::path::PathBuf;

use clap::Args;
use fleetroute_core::{
    pipeline::generate,
    request::{RouteRequest, RouteWindow, VehicleId},
};
use fleetroute_mapon::{
    file_source::FileSource, mapon_api::MaponClient, telemetry_source::TelemetrySource,
};
use jiff::Timestamp;
use tracing::info;

use crate::{
    file_utils::write_json,
    parsers,
    report::{OutputArgs, emit},
};

#[derive(Args)]
pub struct PeriodArgs {
    /// Mapon unit id of the vehicle
    #[arg(long, short = 'v')]
    vehicle: u64,

    /// Start of the period, a date (2024-03-04) or an RFC 3339 timestamp
    #[arg(long, value_parser = parsers::parse_from)]
    from: Timestamp,

    /// End of the period, inclusive. A date means the end of that day
    #[arg(long, value_parser = parsers::parse_till)]
    till: Timestamp,
}

impl PeriodArgs {
    fn request(&self) -> Result<RouteRequest, anyhow::Error> {
        let window = RouteWindow::new(self.from, self.till)?;
        Ok(RouteRequest::new(VehicleId::new(self.vehicle), window))
    }
}

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    period: PeriodArgs,

    /// Keep the raw route payload for later `aggregate` runs
    #[arg(long)]
    save_payload: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let request = args.period.request()?;
    let client = MaponClient::from_env()?;

    info!(
        "Fetching routes for vehicle {} from {} till {}",
        request.vehicle_id,
        request.window.from(),
        request.window.till()
    );

    let payload = client.fetch_routes(&request).await?;

    if let Some(out) = &args.save_payload {
        write_json(out, &payload)?;
        info!("Payload written to {:?}", out);
    }

    let report = generate(request, payload)?;
    emit(&report, &args.output)
}

#[derive(Args)]
pub struct AggregateArgs {
    /// A saved route payload, raw Mapon response or bare `{ "units": [...] }`
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Vehicle the payload belongs to, only used for labelling
    #[arg(long, short = 'v', default_value_t = 0)]
    vehicle: u64,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run_offline(args: AggregateArgs) -> anyhow::Result<()> {
    // The window is informational here, the payload is already filtered.
    let window = RouteWindow::new(Timestamp::MIN, Timestamp::MAX)?;
    let request = RouteRequest::new(VehicleId::new(args.vehicle), window);

    let source = FileSource::new(&args.input);
    let payload = source.fetch_routes(&request).await?;

    let report = generate(request, payload)?;
    emit(&report, &args.output)
}
