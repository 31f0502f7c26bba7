use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use seasoncast::{CityCatalog, RangeTable, Season, SeasoncastConfig, Unit, report, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SeasoncastConfig::load()?;
    init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        None => {
            print_usage();
            Ok(())
        }
        Some((command, _)) if command == "serve" => {
            web::run(&config.server.host, config.server.port).await
        }
        Some((city, rest)) => {
            let season = rest
                .first()
                .map(String::as_str)
                .context("Usage: seasoncast <city> <season> [unit]")?;
            let unit = rest.get(1).map(String::as_str).unwrap_or("Celsius");

            let report = report::build_report_for_labels(
                CityCatalog::builtin(),
                RangeTable::builtin(),
                city,
                season,
                unit,
                &mut rand::rng(),
            )
            .map_err(|err| anyhow::anyhow!(err.user_message()))?;

            println!("{}", report.city.name);
            println!("{}", report.metadata_line());
            println!("{}", report.headline());
            Ok(())
        }
    }
}

fn init_tracing(config: &SeasoncastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_usage() {
    println!("Usage: seasoncast <city> <season> [unit]");
    println!("       seasoncast serve");
    println!();
    let seasons: Vec<&str> = Season::ALL.iter().map(|s| s.name()).collect();
    let units: Vec<&str> = Unit::ALL.iter().map(|u| u.name()).collect();
    println!("Seasons: {}", seasons.join(", "));
    println!("Units:   {}", units.join(", "));
    println!();
    println!("Cities:");
    for name in CityCatalog::builtin().names() {
        println!("  {name}");
    }
}
