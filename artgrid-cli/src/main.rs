mod app;
mod cli;
mod command;
mod paths;
mod render;

use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::time::Duration;

use artgrid_lib::{ArticClient, Session, SessionConfig};
use clap::Parser;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let client = ArticClient::builder()
        .url(&cli.base_url)
        .timeout(Duration::from_secs(cli.timeout))
        .connect_timeout(Duration::from_secs(cli.timeout))
        .user_agent(concat!("artgrid/", env!("CARGO_PKG_VERSION")))
        .build()?;
    log::info!("Browsing {}", client.base_url());

    let config = SessionConfig::default().with_start_page(cli.page);
    App::run(Session::new(client, config)).await
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => {
            paths::rotate_logs();
            paths::log_file()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?
        }
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(cli.log_level.into(), Config::default(), file).map_err(io::Error::other)
}
