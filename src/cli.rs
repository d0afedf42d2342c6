use std::path::PathBuf;

use clap::Parser;

/// Minimal HTTP/1.1 server over raw TCP.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wirehttp")]
#[command(version)]
pub struct Args {
    /// Directory under which /files/ requests are read and written
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on (host:port)
    #[arg(long)]
    pub listen: Option<String>,

    /// Maximum number of connections served at once (0 = unbounded)
    #[arg(long = "max-connections", env = "MAX_CONNECTIONS")]
    pub max_connections: Option<usize>,

    /// Optional YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
