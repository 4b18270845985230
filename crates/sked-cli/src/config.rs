use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sked_core::validation::ValidationPolicy;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Where the schedules are kept between runs
    pub state_path: PathBuf,
    /// Directory receiving one HTML page per week on `sked export`
    pub export_dir: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Schedule used when `--schedule` is not given, instead of the current one
    #[serde(default)]
    pub default_schedule: Option<String>,
    /// Field checks applied to new events before they reach a schedule
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Defaults layered under `config.toml` and the environment.
#[derive(Serialize)]
struct Defaults {
    state_path: PathBuf,
    export_dir: PathBuf,
    log_level: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("sked.json"),
            export_dir: PathBuf::from("weekly_schedules"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Defaults::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SKED_").split("__"))
    }
}

impl Default for Config {
    fn default() -> Self {
        let defaults = Defaults::default();
        Self {
            state_path: defaults.state_path,
            export_dir: defaults.export_dir,
            log_level: defaults.log_level,
            default_schedule: None,
            validation: ValidationPolicy::default(),
        }
    }
}
