use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the risk scoring CSV file
    #[arg(short, long)]
    #[clap(default_value("sample_risk_scoring_banking_solution_data.csv"))]
    pub data: PathBuf,

    /// Address to serve the dashboard on
    #[arg(short, long)]
    #[clap(default_value("127.0.0.1:8050"))]
    pub address: String,
}
