use anyhow::Context;
use booking_core::booking::{availability_preview, resolve_date};
use booking_core::{BookingService, Config, HashOracle, MockCatalog};

fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;
    booking_core::init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    let arg = std::env::args().nth(1);
    let date = resolve_date(arg.as_deref(), chrono::Local::now().date_naive())
        .context("preview date must be YYYY-MM-DD")?;

    tracing::info!(date = %date, environment = %config.environment, "Building availability preview");

    let service = BookingService::new(MockCatalog::new(), HashOracle, config);
    let preview = availability_preview(&service, &date)
        .with_context(|| format!("availability preview for {}", date))?;
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
