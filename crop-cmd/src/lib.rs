//! Command implementations for the crop dataset CLI.
//!
//! Provides subcommands for downloading the dataset and inspecting it
//! the same way the web viewer does: states, district options, and the
//! top-crop ranking for a selection.

use clap::Subcommand;

pub mod fetch;
pub mod report;

/// Default local path of the dataset CSV.
pub const DEFAULT_DATA_PATH: &str = "crop_data.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Download the crop dataset CSV to a local file
    Fetch {
        /// Source URL of the dataset
        url: String,

        /// Output path for the downloaded CSV
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        out: String,
    },

    /// List the distinct states present in the dataset
    States {
        /// Path to the dataset CSV
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// List the district options for a state
    Districts {
        /// State name (exact match)
        state: String,

        /// Path to the dataset CSV
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Show the top crops for a district in the resolved year
    Crops {
        /// State name (exact match)
        state: String,

        /// District name (exact match)
        district: String,

        /// Override the resolved year
        #[arg(short, long)]
        year: Option<String>,

        /// Path to the dataset CSV
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, out } => fetch::run_fetch(&url, &out).await,
        Command::States { data } => report::run_states(&data),
        Command::Districts { state, data } => report::run_districts(&data, &state),
        Command::Crops {
            state,
            district,
            year,
            data,
        } => report::run_crops(&data, &state, &district, year.as_deref()),
    }
}
