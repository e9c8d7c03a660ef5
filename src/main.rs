mod app;

use crate::app::DemoApp;
use padnav::config::{load_cfg, save_cfg};
use padnav::nav::{GridLayout, SelectionDimension};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("padnav=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let config_path = match flag_value(&args, "--config") {
        Some(path) => PathBuf::from(path),
        None => default_config_path(),
    };
    let config = load_cfg(&config_path);

    if args.iter().any(|arg| arg == "--save-config") {
        match save_cfg(&config_path, &config) {
            Ok(()) => {
                info!(path = %config_path.display(), "config written");
                std::process::exit(0);
            }
            Err(err) => {
                error!(%err, path = %config_path.display(), "failed to write config");
                std::process::exit(1);
            }
        }
    }

    let layout = match flag_value(&args, "--layout").map(|name| name.parse::<GridLayout>()) {
        None => GridLayout::default(),
        Some(Ok(layout)) => layout,
        Some(Err(err)) => {
            eprintln!("{err}");
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    };
    let dimension = if args.iter().any(|arg| arg == "--flat") {
        SelectionDimension::Flat
    } else {
        SelectionDimension::Deep
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 640.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    info!(layout = layout.name(), ?dimension, "starting demo");

    eframe::run_native(
        "padnav demo",
        options,
        Box::new(move |cc| {
            crate::app::theme::apply_theme(&cc.egui_ctx);
            let app = DemoApp::new(config, layout, dimension)?;
            Ok(Box::new(app))
        }),
    )
}

/// Value following `flag`; exits with usage when the flag is last.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let index = args.iter().position(|arg| arg == flag)?;
    match args.get(index + 1) {
        Some(value) => Some(value),
        None => {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }
}

fn default_config_path() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_default()
        .join("padnav")
        .join("config.json")
}

static USAGE_TEXT: &str = r#"
Usage: padnav-demo [OPTIONS]

Options:
    --config <path>       Read colors, skins, timeouts and deadzones from this JSON file
    --save-config         Write the effective config to the config path and exit
    --layout <name>       Root layout: default, small-corners, small-corners-verticals,
                          small-corners-wide-verticals, small-corners-ultra-wide-verticals,
                          small-corners-ultra-wide-verticals-horizontals
    --flat                Confirm on a root panel enters its content instead of descending

Keyboard:
    Arrows move, Enter/Space confirm, Escape/Backspace cancel,
    Q/E switch tabs, R resets the cursor, Tab cycles the root layout
"#;
