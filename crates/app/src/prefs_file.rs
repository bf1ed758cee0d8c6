use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Visualizer preferences persisted across launches. Never carries maze
/// state; the carve always starts over from the session seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppPrefs {
    pub format_version: u32,
    pub frame_interval: f32,
    pub show_progress: bool,
}

impl Default for AppPrefs {
    fn default() -> Self {
        Self { format_version: 1, frame_interval: 0.2, show_progress: true }
    }
}

impl AppPrefs {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("prefs.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let prefs: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_prefs_animate_slowly_with_the_overlay_on() {
        let prefs = AppPrefs::default();
        assert_eq!(prefs.frame_interval, 0.2);
        assert!(prefs.show_progress);
    }

    #[test]
    fn json_roundtrip_preserves_every_field() {
        let prefs =
            AppPrefs { format_version: 1, frame_interval: 0.05, show_progress: false };

        let json = serde_json::to_string(&prefs).unwrap();
        let decoded: AppPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, decoded);
    }

    #[test]
    fn atomic_write_then_load_and_no_tmp_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = AppPrefs { frame_interval: 0.4, ..AppPrefs::default() };
        prefs.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = AppPrefs::load(&path).unwrap();
        assert_eq!(prefs, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let err = AppPrefs::load(&path).expect_err("malformed file should not load");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
