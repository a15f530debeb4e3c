//! Skycast: look up a place, fetch its forecast, paint a dashboard.

use clap::Parser;

use skycast_core::{AppError, Config};
use skycast_weather::WeatherPipeline;

mod cli;
mod render;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skycast_core::init()?;
    let args = Cli::parse();

    if let Err(err) = run(args).await {
        tracing::error!("query failed: {}", err);
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Cli) -> Result<(), AppError> {
    let (config, _) = match args.config.as_deref() {
        Some(path) => Config::load_validated_from_path(path)?,
        None => Config::load_validated()?,
    };

    let place = args
        .place
        .clone()
        .or_else(|| {
            config
                .default_city
                .clone()
                .filter(|city| !city.trim().is_empty())
        })
        .ok_or_else(|| {
            AppError::Config(
                "no place to look up; pass one (skycast <place>) or set default_city".to_string(),
            )
        })?;

    let pipeline = WeatherPipeline::with_endpoints(
        &config.provider.geocoding_url,
        &config.provider.forecast_url,
        config.provider.timeout_secs,
    );

    let dashboard = pipeline.run(&place).await?;

    let hours = args.effective_hours(config.display.hours_ahead);
    let show_table = args.effective_show_table(config.display.show_table);
    println!("{}", render::dashboard(&dashboard, hours, show_table));

    Ok(())
}
