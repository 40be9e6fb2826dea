use std::path::Path;

use super::types::Settings;
use crate::{BookstallError, Result};

/// Load settings from `path`, falling back to defaults when the file does
/// not exist. A file that exists but fails to parse is an error — silently
/// ignoring a broken settings file would hide misconfiguration.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        BookstallError::Config(format!(
            "Failed to read settings file {}: {e}",
            path.display()
        ))
    })?;

    let settings: Settings = toml::from_str(&contents).map_err(|e| {
        BookstallError::Config(format!(
            "Failed to parse settings file {}: {e}",
            path.display()
        ))
    })?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MatchMode, PurchaseMode};
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_or_default(dir.path().join("bookstall.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookstall.toml");

        let contents = r#"
[engine]
latency_ms = 25
match_mode = "regex"
purchase_mode = "atomic"

[store]
data_dir = "/tmp/bookstall-data"
"#;
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let settings = load_or_default(&path).unwrap();
        assert_eq!(settings.engine.latency_ms, 25);
        assert_eq!(settings.engine.match_mode, MatchMode::Regex);
        assert_eq!(settings.engine.purchase_mode, PurchaseMode::Atomic);
        assert_eq!(
            settings.store.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/bookstall-data"))
        );
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookstall.toml");

        let mut file = File::create(&path).unwrap();
        file.write_all(b"[engine\nlatency_ms = oops").unwrap();

        let err = load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookstall.toml");

        let mut file = File::create(&path).unwrap();
        file.write_all(b"[engine]\nmatch_mode = \"fuzzy\"").unwrap();

        assert!(load_or_default(&path).is_err());
    }
}
