/// Export the built-in holiday, RDO and closure tables to an editable TOML file
/// Usage: cargo run --release --bin export_reference_data [PATH]
use tracing::info;
use tracing_subscriber::EnvFilter;

use workcal::time::{save_reference_data, ReferenceData};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "reference_data.toml".to_string());

    let data = ReferenceData::victoria();
    info!(
        "📋 {} reference data: {} holidays, {} RDOs, {} closure days",
        data.region(),
        data.holidays().len(),
        data.rdos().len(),
        data.closures().len()
    );

    save_reference_data(&data, &path)?;

    if let Some((first, last)) = data.coverage() {
        info!("✅ Covers {} to {}", first, last);
    }
    info!("💡 Point `reference_data` in workcal.toml (or --reference) at {} to use it", path);

    Ok(())
}
