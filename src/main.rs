//! Ingress adapter inspection tool.
//!
//! ```text
//!   ingress.json ──▶ kube::types ──▶ kube::conversion ──▶ routes (JSON)
//!                                        │
//!                         ┌──────────────┼──────────────┐
//!                         ▼              ▼              ▼
//!                     protocol       routing         naming
//!                    classifier      matcher       identity codec
//! ```
//!
//! Reads cluster descriptors from disk and prints what the adapter derives
//! from them. It never talks to a cluster or a config store.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use ingress_adapter::config::{load_config, AdapterConfig};
use ingress_adapter::kube::{self, Ingress, Service};
use ingress_adapter::model::{kinds, ConfigKind};
use ingress_adapter::naming::decode_identity;
use ingress_adapter::observability::init_logging_for;

#[derive(Parser)]
#[command(name = "ingress-adapter")]
#[command(about = "Inspect how cluster resources map to mesh routing config", long_about = None)]
struct Cli {
    /// Adapter configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ingress into routes keyed by encoded name
    Convert {
        /// Ingress JSON file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Convert a service into a mesh service with classified ports
    Service {
        /// Service JSON file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Decode an encoded config object name
    Decode { name: String },
    /// List registered config kinds
    Kinds,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AdapterConfig::default(),
    };
    init_logging_for(&config, cli.config.as_deref());

    match cli.command {
        Commands::Convert { file } => {
            let ingress: Ingress = read_json(file.as_deref())?;
            if !kube::ingress_class_matches(&ingress, &config) {
                tracing::warn!(
                    ingress = %ingress.metadata.name,
                    class = ?ingress.ingress_class(),
                    "Ingress belongs to another class"
                );
            }
            let routes = kube::convert_ingress(&ingress, &config)?;
            let by_name: BTreeMap<_, _> = routes
                .into_iter()
                .map(|(key, route)| (key.to_string(), route))
                .collect();
            println!("{}", serde_json::to_string_pretty(&by_name)?);
        }
        Commands::Service { file } => {
            let service: Service = read_json(file.as_deref())?;
            let mesh = kube::convert_service(&service, &config)?;
            tracing::info!(
                hostname = %mesh.hostname,
                ports = mesh.ports.len(),
                http_ports = mesh.http_ports().count(),
                "Service converted"
            );
            println!("{}", serde_json::to_string_pretty(&mesh)?);
        }
        Commands::Decode { name } => {
            let identity = decode_identity(&name)?;
            println!("{}", identity);
        }
        Commands::Kinds => {
            for name in kinds() {
                let kind = ConfigKind::from_name(name)?;
                println!("{}\t{}", name, kind.message_name());
            }
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, Box<dyn std::error::Error>> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&content)?)
}
