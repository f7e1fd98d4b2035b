//! Wavesel - waveform selector editor, standalone.

use anyhow::{Context as _, bail};
use clap::Parser;
use eframe::egui;
use wavesel_core::{LFO_TYPES, LfoType};
use wavesel_gui::WaveselApp;
use wavesel_gui_core::EDITOR_SIZE;

/// Wavesel waveform selector.
#[derive(Parser, Debug)]
#[command(name = "wavesel")]
#[command(about = "Waveform selector editor")]
#[command(version)]
struct Args {
    /// Initial waveform by display name (e.g. "Sine", "Reverse Saw")
    #[arg(long)]
    waveform: Option<String>,

    /// Window scale factor (default: 1.0)
    #[arg(long, default_value = "1.0")]
    scale: f32,
}

fn resolve_waveform(name: Option<&str>) -> anyhow::Result<LfoType> {
    let Some(name) = name else {
        return Ok(LfoType::default());
    };
    LFO_TYPES
        .try_id_to_value(LFO_TYPES.id_for_name(name))
        .with_context(|| {
            let known: Vec<_> = LFO_TYPES.iter().map(|(_, e)| e.name()).collect();
            format!("unknown waveform '{name}' (expected one of: {})", known.join(", "))
        })
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    if !args.scale.is_finite() || args.scale <= 0.0 {
        bail!("scale must be a positive number, got {}", args.scale);
    }
    let waveform = resolve_waveform(args.waveform.as_deref())?;

    tracing::info!("Starting Wavesel");
    tracing::info!(waveform = %waveform, scale = args.scale, "editor config");

    let size = EDITOR_SIZE * args.scale;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size * 0.5)
            .with_title("Wavesel"),
        ..Default::default()
    };

    eframe::run_native(
        "Wavesel",
        options,
        Box::new(move |cc| Ok(Box::new(WaveselApp::new(cc, waveform)?))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
