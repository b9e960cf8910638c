//! whodat - terminal companion to the web pages.
//!
//! Examples:
//!   whodat price 100 10 5
//!   whodat price 100 10 5 --json
//!   whodat guess
//!   whodat guess --seed 7 --reveal
//!   whodat config
//!
//! Settings come from `config.json` in the OS config directory (or
//! `--config <file>`), with `WHODAT_CATALOG_URL` applied on top.

use std::process;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, warn};
use whodat::catalog::{fetch_random_item, CatalogApi};
use whodat::config::AppConfig;
use whodat::float_fmt::{fmt_f64_fixed, fmt_money};
use whodat::pricing::{PricingInputs, PROFIT_MARGIN};
use whodat::prng::Prng;
use whodat::reveal::RevealFlow;

mod args;
mod error;
mod http;
mod paths;
mod settings;

use args::{parse_args, usage_text, Cli, Command};
use error::CliError;
use http::ReqwestHttp;
use paths::AppPaths;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", usage_text());
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.clone() {
        Command::Help => {
            println!("{}", usage_text());
            Ok(())
        }
        Command::Price { inputs, json } => {
            print_price(&inputs, json);
            Ok(())
        }
        Command::Guess { seed, reveal } => {
            let (_, cfg) = resolve_config(&cli)?;
            run_guess(&cfg, seed, reveal).await
        }
        Command::Config => {
            let (path, cfg) = resolve_config(&cli)?;
            println!("config file: {path}");
            println!("{}", cfg.to_json_pretty());
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<(String, AppConfig), CliError> {
    let path = match &cli.config_path {
        Some(p) => p.clone(),
        None => AppPaths::new()?.config_file(),
    };
    let cfg = settings::effective_config(&path)?;
    Ok((path.display().to_string(), cfg))
}

fn print_price(inputs: &PricingInputs, json: bool) {
    let point = inputs.chart_point();
    if point.final_price.is_nan() {
        warn!("one of the inputs is not a number; the price is NaN");
    }

    if json {
        // Floats only; serialization cannot fail, but NaN becomes null.
        println!("{}", serde_json::to_string(&point).unwrap_or_default());
        return;
    }

    println!("Final Price: {}", fmt_money(point.final_price));
    println!(
        "  initial cost {}  (base + shipping), margin {}%",
        fmt_money(point.initial_cost),
        fmt_f64_fixed(PROFIT_MARGIN * 100.0, 0)
    );
}

async fn run_guess(cfg: &AppConfig, seed: Option<u64>, reveal_now: bool) -> Result<(), CliError> {
    let http = ReqwestHttp::new(Duration::from_secs(cfg.catalog.request_timeout_secs))?;
    let api = CatalogApi::from(&cfg.catalog);
    let mut rng = Prng::new(seed.unwrap_or_else(clock_seed));

    let item = fetch_random_item(&http, &api, &mut rng).await?;

    let mut flow = RevealFlow::new();
    let ticket = flow.begin_fetch();
    flow.finish_fetch(ticket, Ok(item));

    println!("Who's that Pokémon?  ??? (#???)");
    if !reveal_now {
        println!("Press Enter to reveal...");
        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(CliError::Stdin)?;
    }

    flow.reveal();
    if let (true, Some(item)) = (flow.is_revealed(), flow.item()) {
        println!("It's {}! (#{})", item.display_name(), item.id);
        println!("{}", item.image_url);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
