//! Config file loading

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from an explicit path or by discovery in `root`.
///
/// An explicitly provided file must parse or this errors; an auto-discovered
/// file that fails to parse is logged and ignored so a stray config never
/// blocks generation.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext =
        config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(config) => Ok(config),
        Err(err) if config_path_provided => Err(err),
        Err(err) => {
            tracing::warn!("Ignoring auto-discovered config {}: {}", config_file.display(), err);
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [codeweave] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("codeweave") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val
        .try_into()
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested codeweave section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("codeweave") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = [
        "codeweave.toml",
        ".codeweave.toml",
        "codeweave.yaml",
        ".codeweave.yaml",
        "codeweave.yml",
        ".codeweave.yml",
    ];

    for candidate in candidates {
        let path = root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_config_exists() {
        let tmp = TempDir::new().expect("tmp");
        let config = load_config(tmp.path(), None).expect("config");
        assert_eq!(config.model, "gpt-4o");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("codeweave.toml"),
            "model = 'gpt-4o-mini'\ntimeout_secs = 30\n\n[prompt]\npersona = 'terse bot'\n",
        )
        .expect("write");

        let config = load_config(tmp.path(), None).expect("config");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.prompt.persona, "terse bot");
        // Untouched fields keep their defaults.
        assert_eq!(config.endpoint, Config::default().endpoint);
    }

    #[test]
    fn test_load_yaml_config_with_nested_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("custom.yaml");
        fs::write(&path, "codeweave:\n  owner: alice\n  max_tokens: 2000\n").expect("write");

        let config = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(config.owner, "alice");
        assert_eq!(config.max_tokens, 2000);
    }

    #[test]
    fn test_explicit_invalid_config_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "max_tokens = 'lots'\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.ini");
        fs::write(&path, "model=x\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_soft_fails() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("codeweave.toml"), "max_tokens = 'lots'\n").expect("write");

        let config = load_config(tmp.path(), None).expect("soft fail");
        assert_eq!(config.max_tokens, Config::default().max_tokens);
    }

    #[test]
    fn test_explicit_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }
}
