//! Persistent CLI configuration.
//!
//! Precedence for every setting: command-line flag, then environment
//! (`.env` is loaded first), then `config.json`, then the built-in default.

use std::env;
use std::path::{Path, PathBuf};

use jotter_core::util::{is_http_url, normalize_text_option};
use jotter_core::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Which remote store to mirror writes to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemoteConfig {
    File {
        path: PathBuf,
    },
    Http {
        base_url: String,
        #[serde(default)]
        auth_token: Option<String>,
    },
}

/// Everything needed to open the stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub remote: RemoteConfig,
    pub engine: EngineConfig,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jotter").join(CONFIG_FILE_NAME))
}

fn data_dir() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join("jotter"))
        .ok_or_else(|| CliError::Config("Failed to resolve data directory".into()))
}

pub fn default_db_path() -> Result<PathBuf, CliError> {
    Ok(data_dir()?.join("jotter.db"))
}

pub fn default_remote_path() -> Result<PathBuf, CliError> {
    Ok(data_dir()?.join("remote.json"))
}

impl CliConfig {
    pub fn load() -> Result<Self, CliError> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            CliError::Config(format!("Failed to read config at {}: {error}", path.display()))
        })?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            CliError::Config(format!("Failed to parse config at {}: {error}", path.display()))
        })?;
        config.normalize();
        config.engine.validate()?;
        Ok(config)
    }

    /// Merge flags and environment over the file values
    pub fn resolve(self, cli: &Cli) -> Result<Settings, CliError> {
        let db_path = match cli
            .db_path
            .clone()
            .or_else(|| env::var_os("JOTTER_DB_PATH").map(PathBuf::from))
            .or(self.db_path)
        {
            Some(path) => path,
            None => default_db_path()?,
        };

        let remote = match resolve_remote(cli)? {
            Some(remote) => remote,
            None => match self.remote {
                Some(remote) => remote,
                None => RemoteConfig::File {
                    path: default_remote_path()?,
                },
            },
        };
        remote.validate()?;

        let mut engine = self.engine;
        if cli.verbose {
            engine.log_engine_events = true;
        }

        Ok(Settings {
            db_path,
            remote,
            engine,
        })
    }

    fn normalize(&mut self) {
        if let Some(RemoteConfig::Http {
            base_url,
            auth_token,
        }) = &mut self.remote
        {
            *base_url = base_url.trim().to_string();
            *auth_token = normalize_text_option(auth_token.take());
        }
    }
}

fn resolve_remote(cli: &Cli) -> Result<Option<RemoteConfig>, CliError> {
    let token = normalize_text_option(env::var("JOTTER_REMOTE_TOKEN").ok());

    if let Some(path) = &cli.remote_path {
        return Ok(Some(RemoteConfig::File { path: path.clone() }));
    }
    if let Some(url) = normalize_text_option(cli.remote_url.clone()) {
        return Ok(Some(RemoteConfig::Http {
            base_url: url,
            auth_token: token,
        }));
    }

    let env_path = env::var_os("JOTTER_REMOTE_PATH").map(PathBuf::from);
    let env_url = normalize_text_option(env::var("JOTTER_REMOTE_URL").ok());
    match (env_path, env_url) {
        (Some(_), Some(_)) => Err(CliError::Config(
            "Set only one of JOTTER_REMOTE_PATH and JOTTER_REMOTE_URL".into(),
        )),
        (Some(path), None) => Ok(Some(RemoteConfig::File { path })),
        (None, Some(base_url)) => Ok(Some(RemoteConfig::Http {
            base_url,
            auth_token: token,
        })),
        (None, None) => Ok(None),
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Http { base_url, .. } if !is_http_url(base_url) => Err(CliError::Config(
                format!("Remote URL must start with http:// or https:// (got {base_url})"),
            )),
            _ => Ok(()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File { path } => format!("file {}", path.display()),
            Self::Http { base_url, .. } => base_url.clone(),
        }
    }
}
