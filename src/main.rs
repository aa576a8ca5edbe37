//! route-binder
//!
//! Inspect how route manifests and pattern templates are bound.
//!
//! # Architecture Overview
//!
//! ```text
//!   manifest.toml ──▶ config (load + validate)
//!                          │
//!                          ▼
//!   Server::from_config ──▶ routing registry ◀── lifecycle (Stopped/Running)
//!                          │        ▲
//!                          │        └── pattern compiler ◀── transcoder
//!                          ▼
//!   start() ──▶ binding table (text / JSON)
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use route_binder::config::load_config;
use route_binder::http::serve_manifest;
use route_binder::observability::logging;
use route_binder::routing::{compile_pattern, transcode};

#[derive(Parser)]
#[command(name = "route-binder")]
#[command(about = "Compile and inspect HTTP route bindings", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is unset.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a manifest, bind it, start the server and print the binding table
    Check {
        manifest: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert identifiers to URL segments
    Transcode {
        #[arg(required = true)]
        idents: Vec<String>,
    },
    /// Compile a pattern template for one controller method
    Compile {
        template: String,
        #[arg(value_name = "STRUCT")]
        struct_name: String,
        method: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest, json } => {
            let config = load_config(&manifest)?;
            let level = cli.log_level.unwrap_or_else(|| config.observability.log_level.clone());
            logging::init(&level);

            tracing::info!(manifest = %manifest.display(), "route-binder v0.1.0 checking manifest");

            let server = serve_manifest(&config)?;
            let table = server.binding_table();
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for entry in &table {
                    println!("{:<48} {}", entry.pattern, entry.target);
                }
            }
            server.stop()?;
        }
        Commands::Transcode { idents } => {
            logging::init(cli.log_level.as_deref().unwrap_or("warn"));
            for ident in idents {
                println!("{}", transcode(&ident));
            }
        }
        Commands::Compile {
            template,
            struct_name,
            method,
        } => {
            logging::init(cli.log_level.as_deref().unwrap_or("warn"));
            println!("{}", compile_pattern(&template, &struct_name, &method));
        }
    }

    Ok(())
}
