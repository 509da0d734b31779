use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pointr-mock",
    about = "Pointr mock API: in-memory sites, buildings, and levels over HTTP",
    version,
)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen port (overrides the config file and $PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen address, e.g. 127.0.0.1:8081
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Start with an empty store
    #[arg(long)]
    pub no_seed: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub print_config: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
