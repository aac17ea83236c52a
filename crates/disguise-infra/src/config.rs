//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.disguise/` by default)
//! and deserializes it into [`DisguiseConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use disguise_types::config::DisguiseConfig;

/// Resolve the data directory.
///
/// Priority: `DISGUISE_DATA_DIR`, then `~/.disguise`, then `./.disguise`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DISGUISE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".disguise");
    }

    PathBuf::from(".disguise")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`DisguiseConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> DisguiseConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return DisguiseConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return DisguiseConfig::default();
        }
    };

    match toml::from_str::<DisguiseConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            DisguiseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This is the only test touching DISGUISE_DATA_DIR and it restores it immediately.
        unsafe {
            std::env::set_var("DISGUISE_DATA_DIR", "/tmp/test-disguise");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-disguise"));
        unsafe {
            std::env::remove_var("DISGUISE_DATA_DIR");
        }
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, DisguiseConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
request_timeout_secs = 2
user_agent = "test-agent"

[endpoints]
mojang = "http://localhost:9999/session/{id}"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 2);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.endpoints.mojang, "http://localhost:9999/session/{id}");
        assert_eq!(
            config.endpoints.minetools,
            DisguiseConfig::default().endpoints.minetools
        );
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, DisguiseConfig::default());
    }
}
