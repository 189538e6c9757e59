//! sysvbanner - print text as big block letters
//!
//! ```text
//! ####   ###  #   # #   # ##### ####
//! #   # #   # ##  # ##  # #     #   #
//! ####  ##### # # # # # # ###   ####
//! #   # #   # #  ## #  ## #     #   #
//! #   # #   # #   # #   # #     #   #
//! #   # #   # #   # #   # #     #   #
//! ####  #   # #   # #   # ##### #   #
//! ```

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use sysvbanner_config::Config;
use sysvbanner_core::{Banner, UnsupportedPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print text as large ASCII-art block letters
#[derive(Parser, Debug)]
#[command(name = "sysvbanner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to print, one banner per argument (reads stdin when omitted)
    text: Vec<String>,

    /// Fail on characters the font cannot draw instead of leaving a gap
    #[arg(long)]
    strict: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };

        if self.strict {
            config.render.unsupported = UnsupportedPolicy::Error;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the banner
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("sysvbanner={}", log_level)),
        ))
        .init();

    tracing::debug!("Starting sysvbanner v{}", sysvbanner_core::VERSION);

    let config = args.load_config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.print_config {
        out.write_all(config.to_toml()?.as_bytes())?;
        return Ok(());
    }

    let banner = Banner::with_policy(config.render.unsupported);

    if args.text.is_empty() {
        tracing::debug!("No arguments, reading standard input");
        let stdin = io::stdin();
        print_lines(&banner, stdin.lock(), &mut out)?;
    } else {
        for text in &args.text {
            print_banner(&banner, text, &mut out)?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Print one banner per input line
fn print_lines<R: BufRead, W: Write>(
    banner: &Banner,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read standard input")?;
        print_banner(banner, &line, out)?;
    }
    Ok(())
}

fn print_banner<W: Write>(banner: &Banner, text: &str, out: &mut W) -> anyhow::Result<()> {
    banner
        .render(text, out)
        .with_context(|| format!("failed to print banner for {text:?}"))
}
