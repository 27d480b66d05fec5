use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

/// Default Neovim color scheme directory, relative to the home directory.
pub const DEFAULT_NEOVIM_OUT: &str =
    ".local/share/nvim/site/pack/packer/start/base16-vim/colors";
/// Default base16-shell scripts directory, relative to the home directory.
pub const DEFAULT_TERMINAL_OUT: &str = ".config/base16-shell/scripts";

/// Output directories. Relative paths are joined onto the home directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub neovim_out: PathBuf,
    pub terminal_out: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neovim_out: PathBuf::from(DEFAULT_NEOVIM_OUT),
            terminal_out: PathBuf::from(DEFAULT_TERMINAL_OUT),
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        neovim_out: Option<PathBuf>,
        terminal_out: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = neovim_out {
            self.neovim_out = dir;
        }
        if let Some(dir) = terminal_out {
            self.terminal_out = dir;
        }
        self
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "base16-themer", "base16-themer")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist. The default location is optional and falls
/// back to built-in defaults when absent.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            path
        }
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

pub fn home_dir() -> anyhow::Result<PathBuf> {
    let base = BaseDirs::new().context("could not resolve home directory")?;
    Ok(base.home_dir().to_path_buf())
}
