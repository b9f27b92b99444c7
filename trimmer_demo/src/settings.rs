// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use trimmer_canvas::CanvasConfig;

/// Reads a JSON canvas configuration, or the defaults when no path is given.
pub(crate) fn load(path: Option<&Path>) -> Result<CanvasConfig> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use trimmer_canvas::CanvasConfig;

    use super::load;

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load(None).unwrap(), CanvasConfig::default());
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trimmer.json");
        fs::write(&path, r#"{ "border_color": [0, 255, 0, 255] }"#).unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.border_color, [0, 255, 0, 255]);
        assert_eq!(config.zoom_step, CanvasConfig::default().zoom_step);
    }

    #[test]
    fn bad_json_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
