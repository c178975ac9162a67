use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;
use tracing::error;

use crate::{
    generate::GenerateSubcommands,
    route::{AggregateArgs, RouteArgs},
};

mod file_utils;
mod generate;
mod parsers;
mod report;
mod route;
mod vehicles;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the vehicles of the account
    Vehicles,
    /// Fetch a vehicle's routes for a period and summarize them
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Summarize a saved route payload
    Aggregate {
        #[command(flatten)]
        args: AggregateArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let result = match cli.command {
        Some(Commands::Vehicles) => vehicles::run().await,
        Some(Commands::Route { args }) => route::run(args).await,
        Some(Commands::Aggregate { args }) => route::run_offline(args).await,
        Some(Commands::Generate { commands }) => generate::run(commands),
        None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
