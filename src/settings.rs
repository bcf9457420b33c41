use std::env;

use serde::Deserialize;
use tracing::info;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_app_env() -> String {
    "production".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub prefix: Option<String>,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Config {
    /// Internal error detail is only returned to clients in development.
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environtment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environtment as environtment variable");
    }
    Ok(envy::from_env::<Config>()?)
}
