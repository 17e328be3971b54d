use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use media_embed::config::CONFIG_FILE;
use media_embed::{Config, MediaLink};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Resolve pasted media links into embeddable players
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Links or iframe embed codes; read one per line from stdin if none are given
    links: Vec<String>,

    /// Print iframe (or link) markup instead of JSON
    #[arg(long)]
    html: bool,

    /// Title attached to every resolved link
    #[arg(long)]
    title: Option<String>,

    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Print the effective dimension table and exit
    #[arg(long)]
    print_config: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("media_embed={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::from_file(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };
    debug!(?config, "loaded config");

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    if cli.print_config {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    if cli.links.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                print_link(cli, config, &line)?;
            }
        }
    } else {
        for link in &cli.links {
            print_link(cli, config, link)?;
        }
    }
    Ok(())
}

fn print_link(cli: &Cli, config: &Config, raw: &str) -> Result<()> {
    let mut link = MediaLink::new(raw);
    link.set_title(cli.title.clone());
    if link.preview_failed() {
        info!(raw, media_type = %link.media_type(), "could not generate a preview");
    }

    let rendering = config.dimensions.rendering(link.media_type());
    if cli.html {
        println!("{}", rendering.html(link.embed_url(), link.title()));
    } else {
        let output = serde_json::json!({
            "link": link,
            "rendering": rendering,
            "previewFailed": link.preview_failed(),
        });
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}
