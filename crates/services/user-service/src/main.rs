//! User Service - command line front end for the in-memory user registry.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::UserService;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the demo users, read them back and probe an unknown id
    Demo {
        /// Print users as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create one user and print it
    New {
        name: String,
        #[arg(allow_negative_numbers = true)]
        age: i32,
        /// Print the user as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = UserServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), "Command failed: {}", err);
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &UserServiceConfig) -> AppResult<()> {
    let manager = user_service_lib::build_manager(config);

    match cli.command {
        Commands::Demo { json } => {
            info!("Running {} demo", config.service.service_name);
            let report = user_service_lib::run_demo(&manager)?;
            println!("{}", user_service_lib::render_report(&report, json)?);
        }
        Commands::New { name, age, json } => {
            let user = manager.register(name, age);
            println!("{}", user_service_lib::render_users(&[user], json)?);
        }
    }

    Ok(())
}
