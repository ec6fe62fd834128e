use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Secret used when none is configured; only acceptable for local runs
pub const DEV_SECRET_KEY: &str = "dev-secret-key";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub rate_limit: RateLimitConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub temperature: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    pub min_interval_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    pub use_agent_pipeline: bool,
    pub refine: bool,
    pub max_iterations: u32,
}

impl ApiConfig {
    /// Defaults, then the TOML file (if any), then process environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::load`] with an injectable environment lookup
    pub fn load_with(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let file_path = config_path
            .or_else(|| env("IPSTRAT_CONFIG").map(PathBuf::from))
            .or_else(default_config_path)
            .filter(|p| p.exists());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 10000_i64)?
            .set_default("server.secret_key", DEV_SECRET_KEY)?
            .set_default("llm.model", ipstrat_llm_sdk::models::gemini::GEMINI_1_5_FLASH)?
            .set_default("llm.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("llm.timeout_secs", 30_i64)?
            .set_default("llm.temperature", 0.7_f64)?
            .set_default("rate_limit.min_interval_secs", 15_i64)?
            .set_default("analysis.use_agent_pipeline", true)?
            .set_default("analysis.refine", false)?
            .set_default("analysis.max_iterations", 2_i64)?;

        if let Some(path) = &file_path {
            builder = builder.add_source(File::from(path.as_path()));
        }

        let api_key = env("GOOGLE_API_KEY")
            .or_else(|| env("GEMINI_API_KEY"))
            .filter(|k| !k.trim().is_empty());
        let secret_key = env("SECRET_KEY").or_else(|| env("FLASK_SECRET_KEY"));

        builder = builder
            .set_override_option("llm.api_key", api_key)?
            .set_override_option("llm.model", env("GEMINI_MODEL"))?
            .set_override_option("server.port", env("PORT"))?
            .set_override_option("server.secret_key", secret_key)?;

        let config: ApiConfig = builder.build()?.try_deserialize()?;
        Ok((config, file_path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.llm.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.server.secret_key == DEV_SECRET_KEY
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ipstrat/api.toml"))
}

/// Load a `.env` file once at startup; a missing file is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) => dotenvy::from_path(p).ok().map(|_| p.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}
