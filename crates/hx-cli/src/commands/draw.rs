use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use colored::Colorize;

use hx_entropy::{
    BatteryProbe, Clock, EntropyConfig, EntropySource, FixedBattery, SystemClock,
};

/// Options for a live draw.
pub struct DrawOptions {
    pub latency: Option<Duration>,
    pub battery: Option<f64>,
    pub sysfs_root: Option<PathBuf>,
    pub json: bool,
}

pub fn run(opts: DrawOptions) -> Result<(), String> {
    let engine = super::engine()?;

    let mut config = EntropyConfig::default();
    if let Some(latency) = opts.latency {
        config = config.with_latency(latency);
    }
    if let Some(root) = opts.sysfs_root {
        config = config.with_sysfs_root(root);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    if !opts.json {
        println!("  {}", "SAMPLING ENTROPY...".dimmed());
    }

    let seed = match opts.battery {
        Some(level) => runtime.block_on(sample(EntropySource::with_parts(
            FixedBattery(Some(level)),
            SystemClock,
            config,
        ))),
        None => runtime.block_on(sample(EntropySource::new(config))),
    }?;

    let reading = engine.resolve(seed).map_err(|e| e.to_string())?;
    if !opts.json {
        println!();
    }
    let drawn_at = serde_json::Value::String(Utc::now().to_rfc3339());
    super::print_reading(
        engine.table(),
        &reading,
        Some(seed),
        Some(("drawnAt", drawn_at)),
        opts.json,
    )
}

async fn sample<B: BatteryProbe, C: Clock>(
    source: EntropySource<B, C>,
) -> Result<hx_core::Seed, String> {
    source.get_seed().await.map_err(|e| {
        tracing::warn!(error = %e, "seed generation failed");
        if e.is_retryable() {
            format!("{e} (no reading drawn, try again)")
        } else {
            e.to_string()
        }
    })
}
