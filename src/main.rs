mod config;
mod constants;
mod core_auth;
mod core_cli;
mod core_fs;
mod core_ftpcommand;
mod core_network;
mod helpers;
mod server;
mod session;

use crate::core_cli::Cli;
use crate::core_fs::{FsFactory, LocalFs, RemoteFs};
use crate::helpers::{load_config, log_config};
use anyhow::Result;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize the logger with a custom format and colors
    let default_filter = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp().to_string();
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red(),
                log::Level::Warn => record.level().to_string().yellow(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().white(),
            };
            writeln!(buf, "[{}] [{}] {}", timestamp, level, record.args())
        })
        .init();

    let mut config = load_config(&args.config)?;

    // CLI values win over the configuration file
    if let Some(listen_port) = args.listen_port {
        config.server.listen_port = listen_port;
    }
    if let Some(root_dir) = args.root_dir {
        config.storage.root_dir = root_dir;
    }
    log_config(&config);

    let root_dir = PathBuf::from(&config.storage.root_dir);
    let passwd_file = config.storage.passwd_file.as_ref().map(PathBuf::from);
    let factory: FsFactory = Arc::new(move || {
        Box::new(LocalFs::new(&root_dir, passwd_file.clone())) as Box<dyn RemoteFs>
    });

    server::run(config, factory).await?;

    Ok(())
}
