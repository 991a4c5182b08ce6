mod bands;
mod cli;
mod config;
mod days;
mod errors;
mod fetch;
mod filter;
mod inventory;
mod languages;
mod loader;
mod model;
mod output;
mod parser;
mod season;

use crate::config::RunConfig;
use crate::fetch::HttpFetcher;
use crate::loader::ScheduleLoader;
use anyhow::Context;
use chrono::Utc;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("***");
        eprintln!("error: {:#}", e);
        eprintln!("***");
        std::process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> anyhow::Result<()> {
    let now = Utc::now();
    let cfg = RunConfig::from_args(args, now).context("invalid options")?;
    let dir = &cfg.loader.storage_dir;
    loader::ensure_storage_dir(dir)?;

    if cfg.list_cached {
        for (code, path) in loader::list_cached(dir)? {
            println!("{}  {}", code, path.display());
        }
        return Ok(());
    }

    let seasons = loader::candidate_seasons(cfg.season, now.date_naive())?;
    let fetcher = HttpFetcher::new(cfg.fetch_timeout)?;
    let schedule = ScheduleLoader::new(&cfg.loader, &fetcher)
        .load(&seasons, now)
        .context("loading schedule")?;
    info!("Using schedule {}", schedule.season);
    inventory::log_inventory(&schedule.records);

    let matches = cfg.filter.apply(&schedule.records);
    output::render(&matches, cfg.format, cfg.out.as_deref()).context("writing output")?;

    info!(
        "{} of {} broadcasts matched",
        matches.len(),
        schedule.records.len()
    );
    Ok(())
}
