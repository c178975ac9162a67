use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the route report schema
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Generate the schema of the input payload instead
        #[arg(long)]
        payload: bool,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out, payload } => {
            let schema = if payload {
                fleetroute_core::schema::generate_payload_json_schema()?
            } else {
                fleetroute_core::schema::generate_report_json_schema()?
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
