use crate::config::types::NavConfig;
use crate::error::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Load settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_cfg(path: &Path) -> NavConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, NavConfig>(BufReader::new(file)) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded navigation settings");
                return config;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "ignoring malformed settings"),
        }
    }

    NavConfig::default()
}

pub fn save_cfg(path: &Path, config: &NavConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{Color, Skin};
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("padnav-cfg-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let cfg = load_cfg(&scratch("does-not-exist.json"));
        assert_eq!(cfg, NavConfig::default());
        assert_eq!(cfg.content_click_timeout_ms, 100);
        assert_eq!(cfg.message_box_timeout_ms, 500);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("saved.json");
        let mut cfg = NavConfig::default();
        cfg.selected_color = Color::rgb(10, 20, 30);
        cfg.selected_skin = Skin::ListBackground;
        save_cfg(&path, &cfg).unwrap();

        assert_eq!(load_cfg(&path), cfg);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch("partial.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "content_click_timeout_ms": 250 }"#).unwrap();

        let cfg = load_cfg(&path);
        assert_eq!(cfg.content_click_timeout_ms, 250);
        assert_eq!(cfg.selected_color, Color::LIGHT_PINK);
        assert_eq!(cfg.default_skin, Skin::Simple);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_cfg(&path), NavConfig::default());
    }
}
