// src/cli/mod.rs
// CLI module for roaster commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod decode;
pub mod roast;
pub mod serve;

pub use decode::run_decode;
pub use roast::run_roast;
pub use serve::run_server;

#[derive(Parser)]
#[command(name = "roaster")]
#[command(about = "Brutally honest AI critique of landing page screenshots")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (default)
    Serve {
        /// Interface to bind (overrides ROASTER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides ROASTER_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Roast a screenshot file or a live URL from the terminal
    Roast {
        /// Screenshot file (PNG, JPG, WebP or GIF)
        #[arg(index = 1, required_unless_present = "url", conflicts_with = "url")]
        path: Option<PathBuf>,

        /// Capture this page instead of reading a file
        #[arg(long)]
        url: Option<String>,

        /// Print the raw roast JSON instead of the report
        #[arg(long)]
        json: bool,

        /// Base for the printed share link (default: ROASTER_PUBLIC_URL or host:port)
        #[arg(long)]
        share_base: Option<String>,
    },

    /// Print the report stored in a share token
    Decode {
        /// Token from a /r/<token> link (the full link works too)
        #[arg(index = 1)]
        token: String,
    },
}
