//! geocp — annotate locality GeoJSON with postal codes
//!
//! Reads a province-level dataset whose features carry `Localidad` and `CP`,
//! indexes postal codes by normalized locality name, and adds a
//! `codigo_postal` list to every feature of a locality dataset.
//!
//! Usage examples
//! --------------
//!
//! - Run the join with the default file names in the current directory
//!   $ geocp
//!
//! - Explicit paths, accent-insensitive matching
//!   $ geocp -s provincias.geojson -t localidades.geojson.json -o salida.json --fold-accents join
//!
//! - Inspect the index
//!   $ geocp index
//!   $ geocp index --json > index.json
//!   $ geocp lookup "San José"
//!
//! Set `RUST_LOG=info` (or `debug`) for progress on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geocp_core::{pipeline, JoinConfig};
use log::debug;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let config = JoinConfig::new(&args.source, &args.target, &args.output)
        .with_fold_accents(args.fold_accents);
    debug!("{config:?}");

    match args.command.unwrap_or(Commands::Join) {
        Commands::Join => {
            let report = pipeline::run(&config).with_context(|| {
                format!(
                    "joining {} into {}",
                    config.source_path.display(),
                    config.target_path.display()
                )
            })?;
            println!(
                "Archivo modificado guardado como {}",
                report.output_file_name()
            );
            println!(
                "Mapeo creado para {} localidades únicas.",
                report.unique_localities
            );
        }

        Commands::Index { json } => {
            let index = pipeline::build_index(&config)
                .with_context(|| format!("indexing {}", config.source_path.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(index.entries())?);
            } else {
                println!("Mapeo creado para {} localidades únicas.", index.len());
                println!(
                    "Features: {} ({} without locality)",
                    index.scanned(),
                    index.skipped()
                );
            }
        }

        Commands::Lookup { name } => {
            let index = pipeline::build_index(&config)
                .with_context(|| format!("indexing {}", config.source_path.display()))?;
            let key = index.key_for(&name);
            let codes = index
                .lookup(&name)
                .unwrap_or_else(|| vec![config.fields.sentinel.clone()]);
            println!("{key}: {}", codes.join(", "));
        }
    }

    Ok(())
}
