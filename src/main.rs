mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use smsgate::config::AppConfig;
use smsgate::db;
use smsgate::db::queries;
use smsgate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let conn = db::init_db(&config.database_url)?;
    let state = AppState::new(config, conn)?;

    match cli.command {
        Commands::Send(args) => {
            let handler = state.handler(&args.gate)?;
            match handler.send(&args.phone, &args.message).await {
                Ok(body) => {
                    println!("{}", serde_json::json!({ "success": true, "payload": body }));
                }
                Err(e) => {
                    println!(
                        "{}",
                        serde_json::json!({ "success": false, "payload": e.descriptor() })
                    );
                    std::process::exit(1);
                }
            }
        }
        Commands::Gates => {
            for name in state.registry.names() {
                let configured = state.config.gates.contains_key(name);
                println!("{name}\tconfigured={configured}");
            }
        }
        Commands::Logs(args) => {
            let logs = {
                let db = state
                    .db
                    .lock()
                    .map_err(|_| anyhow::anyhow!("sms log connection poisoned"))?;
                queries::recent_sms_logs(&db, args.limit)?
            };
            for log in logs {
                println!("{}", serde_json::to_string(&log)?);
            }
        }
    }

    Ok(())
}
