mod app;
mod config;
mod net;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    layers: Option<String>,

    #[arg(long)]
    rotation_speed: Option<f32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = config::resolve_config(
        args.config.as_deref(),
        args.layers.as_deref(),
        args.rotation_speed,
    )?;

    log::info!(
        "starting with layers {:?}: {} nodes, {} edges",
        config.layers,
        config.node_count(),
        config.edge_count()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "neuroviz",
        options,
        Box::new(move |cc| Ok(Box::new(app::NeurovizApp::new(cc, config)))),
    )
    .map_err(|error| anyhow!("failed to run viewer: {error}"))
}
