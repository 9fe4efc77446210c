//! deskcalc binary: interactive terminal calculator.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deskcalc::{render_frame, DeskConfig, LineOutcome, Repl};
use libcalc_core::{CalculatorEngine, Key};

/// Terminal four-function calculator.
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about = "Terminal four-function calculator")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feed a keystroke string (digits, '.', '+', '-', '*', '/', '='),
    /// print the final display and exit.
    #[arg(long)]
    keys: Option<String>,

    /// Log filter when RUST_LOG is unset, e.g. "debug" or
    /// "libcalc_core=trace".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => DeskConfig::load_toml(path)?,
        None => DeskConfig::default(),
    };

    if let Some(keys) = &args.keys {
        let mut engine = CalculatorEngine::new();
        for ch in keys.chars() {
            engine.process_key(Key::Char(ch));
        }
        println!("{}", render_frame(&engine.display(), config.display_width));
        return Ok(());
    }

    run_repl(&config)
}

fn run_repl(config: &DeskConfig) -> Result<()> {
    debug!(?config, "starting interactive session");
    println!("deskcalc — digits, '.', '+', '-', '*', '/'; '=' or an empty line computes");
    println!("words: 'clear', 'del', 'quit'; Ctrl-D exits");

    let mut repl = Repl::new();
    print_frame(&repl, config);

    let stdin = io::stdin();
    loop {
        print!("{}", config.prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match repl.feed_line(&line) {
            LineOutcome::Quit => break,
            LineOutcome::Fed { ignored } => {
                if ignored > 0 && config.report_ignored {
                    println!("({ignored} key(s) had no calculator meaning)");
                }
                print_frame(&repl, config);
            }
        }
    }
    Ok(())
}

fn print_frame(repl: &Repl, config: &DeskConfig) {
    println!("{}", render_frame(&repl.frame(), config.display_width));
}
