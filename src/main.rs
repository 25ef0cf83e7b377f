use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use local_impact::config::{ServeArgs, ServeConfig};
use local_impact::core::{ImpactCalculator, LocalImpactCalculator};
use local_impact::{api, report};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "local-impact",
    about = "Local economic impact estimator for retailers (calculator + web dashboard)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the interactive dashboard over HTTP
    Serve(ServeArgs),
    /// Print local impact for the built-in sample retailers
    Report {
        #[arg(long, help = "Emit summaries as JSON instead of text")]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let calculator: Arc<dyn ImpactCalculator> = Arc::new(LocalImpactCalculator);

    match cli.command {
        Command::Serve(args) => {
            let config = match ServeConfig::try_from(args) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %e, "invalid configuration");
                    process::exit(2);
                }
            };
            info!(addr = %config.addr, "starting dashboard");
            if let Err(e) = api::run_http_server(config, calculator).await {
                error!(error = %e, "server error");
                process::exit(1);
            }
        }
        Command::Report { json } => {
            let retailers = match report::sample_retailers() {
                Ok(retailers) => retailers,
                Err(e) => {
                    error!(error = %e, "invalid sample inputs");
                    process::exit(1);
                }
            };
            let summaries = report::summarize_all(calculator.as_ref(), &retailers);
            if json {
                match serde_json::to_string_pretty(&summaries) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        error!(error = %e, "failed to serialize report");
                        process::exit(1);
                    }
                }
            } else {
                print!("{}", report::render_text(&summaries));
            }
        }
    }
}
