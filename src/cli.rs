use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use address_lookup::batch::DEFAULT_CONCURRENCY;
use address_lookup::config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use address_lookup::AddressFilter;

#[derive(Parser, Debug)]
#[command(name = "address-lookup", version, about = "Look up addresses with the address-validation service")]
pub struct Cli {
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, help = "Base url of the service")]
    pub base_url: String,
    #[arg(long, global = true, env = TIMEOUT_ENV, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a single address and print the result as JSON
    Lookup {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, help = "Print the response body as-is, whatever the status")]
        raw: bool,
    },
    /// Look up every row of a CSV file
    Batch {
        #[arg(help = "CSV with columns line1,city,state_code,zip_code_leading5")]
        input: PathBuf,
        #[arg(short, long, help = "Write CSV here instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },
}

// nothing is checked locally, missing fields are left to the service to reject
#[derive(Args, Debug)]
pub struct FilterArgs {
    #[arg(long)]
    pub line1: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state_code: Option<String>,
    #[arg(long = "zip")]
    pub zip_code_leading5: Option<String>,
}

impl From<FilterArgs> for AddressFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            line1: args.line1,
            city: args.city,
            state_code: args.state_code,
            zip_code_leading5: args.zip_code_leading5,
        }
    }
}
