use clap::{Parser, Subcommand};
use geocp_core::config::{DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_FILE, DEFAULT_TARGET_FILE};
use std::path::PathBuf;

/// CLI arguments for geocp
#[derive(Debug, Parser)]
#[command(
    name = "geocp",
    version,
    about = "Annotate locality GeoJSON features with postal codes from a province dataset"
)]
pub struct CliArgs {
    /// Province dataset with `Localidad` and `CP` properties (.gz accepted)
    #[arg(short = 's', long = "source", global = true, default_value = DEFAULT_SOURCE_FILE)]
    pub source: PathBuf,

    /// Locality dataset whose features get annotated (.gz accepted)
    #[arg(short = 't', long = "target", global = true, default_value = DEFAULT_TARGET_FILE)]
    pub target: PathBuf,

    /// Where the annotated dataset is written; overwritten if present
    #[arg(short = 'o', long = "output", global = true, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Ignore diacritics when matching names (e.g. "José" == "Jose")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Defaults to `join` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the index, annotate the target and write the output
    Join,

    /// Build the index only and report its size
    Index {
        /// Dump the whole index as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized key and postal codes for a locality name
    Lookup {
        /// Free-text locality name (e.g. "Rosario")
        name: String,
    },
}
