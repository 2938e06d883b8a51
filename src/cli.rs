use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "smsgate")]
#[command(about = "Send SMS through configured gates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message through a gate
    Send(SendArgs),
    /// List registered gates and whether they are configured
    Gates,
    /// Show the most recent send attempts
    Logs(LogsArgs),
}

#[derive(clap::Args, Debug)]
pub struct SendArgs {
    /// Gate name, e.g. SMSC or SMSTraffic
    #[arg(long)]
    pub gate: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: String,
}

#[derive(clap::Args, Debug)]
pub struct LogsArgs {
    #[arg(long, default_value_t = 20)]
    pub limit: i64,
}
