use clap::{Parser, Subcommand};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Parser, Debug)]
#[command(
    name = "societario",
    version,
    about = "Societário Insight: look up company partners by CNPJ"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "SOCIETARIO_API_URL",
        default_value = DEFAULT_API_BASE_URL,
        help = "Base URL of the partner service"
    )]
    pub api_base_url: String,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the partner registered for a CNPJ
    Lookup {
        /// CNPJ, punctuation allowed (non-digits are dropped)
        cnpj: String,
        #[arg(long, help = "Open the map link in the browser")]
        open: bool,
        #[arg(long, help = "Expand the activity (CNAE) list")]
        activities: bool,
    },
    /// Print a CNPJ as NN.NNN.NNN/NNNN-NN
    Format { cnpj: String },
    /// Interactive search session
    Search,
}
