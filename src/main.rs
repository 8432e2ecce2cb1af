use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use playdeck::catalog::Catalog;
use playdeck::platform::{MediaHandle, SimHost, SimMedia};
use playdeck::player::{InputSignal, PlayerController};
use playdeck::surface::{ControlSurface, PageLayout};
use playdeck::utils::Config;

/// Playdeck - a headless demo of the video player control surface
///
/// Drives the controller through a scripted interaction session against
/// the simulated platform and reports the resulting surface state.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file to load (TOML with [[sources]] tables)
    #[arg(value_name = "CATALOG")]
    catalog: Option<PathBuf>,

    /// Initial volume (0-100)
    #[arg(short, long, value_name = "VOLUME")]
    volume: Option<u8>,

    /// Source index to switch to mid-session
    #[arg(short, long, default_value = "1")]
    source: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(volume) = args.volume {
        config.player.default_volume = f64::from(volume.min(100)) / 100.0;
    }

    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Playdeck v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match args.catalog.as_deref().or(config.catalog.path.as_deref()) {
        Some(path) => Catalog::from_toml_path(path)?,
        None => Catalog::builtin(),
    };
    info!("Catalog holds {} sources", catalog.len());

    // Seed the simulated platform with a duration per source so the
    // scripted session has a clock to scrub against
    let mut media = SimMedia::new();
    for (index, source) in catalog.iter().enumerate() {
        media = media.with_source_duration(&source.uri, 90.0 + 30.0 * index as f64);
    }
    let media = Arc::new(media);
    let host = Arc::new(SimHost::new());

    let surface = ControlSurface::bind(&PageLayout::standard())?;
    let mut controller = PlayerController::new(media.clone(), host, surface, catalog, &config);

    // Scripted session: startup, playback, scrub, volume, mute round-trip,
    // speed, PiP, fullscreen, then a source switch
    controller.handle(InputSignal::Ready);
    controller.handle(InputSignal::CanPlay);

    controller.handle(InputSignal::PlayClicked);
    for _ in 0..5 {
        media.advance(2.0);
        controller.handle(InputSignal::TimeUpdate);
    }

    controller.handle(InputSignal::ProgressClicked {
        offset_x: 450.0,
        track_width: 600.0,
    });
    controller.handle(InputSignal::TimeUpdate);

    controller.handle(InputSignal::VolumeClicked {
        offset_x: 33.0,
        track_width: 100.0,
    });
    controller.handle(InputSignal::MuteClicked);
    controller.handle(InputSignal::MuteClicked);

    controller.handle(InputSignal::SpeedSelected { rate: 1.5 });
    controller.handle(InputSignal::PipClicked);
    controller.handle(InputSignal::PipClicked);
    controller.handle(InputSignal::FullscreenClicked);
    controller.handle(InputSignal::FullscreenClicked);

    controller.handle(InputSignal::SourceSelected { index: args.source });
    controller.handle(InputSignal::CanPlay);

    let surface = controller.surface();
    println!("session complete");
    println!(
        "  source    : {}",
        media.loaded_source().unwrap_or_else(|| "<none>".to_string())
    );
    println!(
        "  selector  : {} options, index {}",
        surface.selector.len(),
        surface.selector.selected_index()
    );
    println!(
        "  playback  : {} at {:.2}x, {} / {}",
        if media.is_paused() { "paused" } else { "playing" },
        media.playback_rate(),
        surface.elapsed.text().trim_end_matches(" /"),
        surface.duration.text()
    );
    println!(
        "  volume    : {:.0}% ({:?})",
        surface.volume_bar.percent(),
        surface.volume_icon.glyph()
    );
    println!(
        "  stage     : fullscreen={} pip_hidden={}",
        surface.stage.fullscreen(),
        surface.pip.hidden()
    );

    Ok(())
}
