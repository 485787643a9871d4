//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use muse_content::DatoCmsClient;
use muse_mail::BrevoClient;

use crate::config::{MuseConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with environment overrides applied.
    pub config: MuseConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The file the config was read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (MuseConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config_file(&cwd) {
                Some(path) => {
                    let path_str = path.to_string_lossy().to_string();
                    (MuseConfig::load(&path_str)?, Some(path))
                }
                None => (MuseConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config: config.with_env_overrides(),
            output,
            cwd,
            config_path,
        })
    }

    /// A CMS client built from the current config.
    pub fn cms(&self) -> Result<DatoCmsClient> {
        DatoCmsClient::new(self.config.cms.clone())
            .context("Set cms.api_token in muse.toml or DATOCMS_API_TOKEN in the environment")
    }

    /// A mail client built from the current config.
    pub fn mailer(&self) -> Result<BrevoClient> {
        BrevoClient::new(&self.config.mail)
            .context("Set mail.api_key in muse.toml or BREVO_API_KEY in the environment")
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("muse-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".muse.toml"), "").unwrap();

        assert_eq!(find_config_file(&nested), Some(root.join(".muse.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_muse_toml() {
        let root = scratch_dir("prefer");
        std::fs::write(root.join("muse.json"), "{}").unwrap();
        std::fs::write(root.join("muse.toml"), "").unwrap();

        assert_eq!(find_config_file(&root), Some(root.join("muse.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
