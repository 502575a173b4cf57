//! CreativeFuse configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main CreativeFuse configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log level (overridden by --log-level)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Chat-completion provider configuration
    pub llm: LlmConfig,

    /// Settings for the long-form boost flow
    pub boost: BoostConfig,

    /// Settings for the short-form generate flow
    pub generate: GenerateConfig,

    /// Listener configuration
    pub server: ServerConfig,

    /// Input screening rules
    #[serde(rename = "content-policy")]
    pub content_policy: ContentPolicyConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// The provider secret must be present at startup. A missing key is a
    /// process failure, never a per-request one.
    pub fn validate(&self) -> Result<()> {
        self.llm.api_key()?;
        if self.content_policy.min_chars > self.content_policy.max_chars {
            return Err(eyre::eyre!(
                "content-policy min-chars ({}) exceeds max-chars ({})",
                self.content_policy.min_chars,
                self.content_policy.max_chars
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .creativefuse.yml
        let local_config = PathBuf::from(".creativefuse.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/creativefuse/creativefuse.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("creativefuse").join("creativefuse.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Errors are ignored here; the full load reports them once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates: Vec<PathBuf> = match config_path {
            Some(path) => vec![path.clone()],
            None => {
                let mut paths = vec![PathBuf::from(".creativefuse.yml")];
                if let Some(config_dir) = dirs::config_dir() {
                    paths.push(config_dir.join("creativefuse").join("creativefuse.yml"));
                }
                paths
            }
        };

        candidates
            .iter()
            .find(|p| p.exists())
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_yaml::from_str::<Self>(&content).ok())
            .and_then(|config| config.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Chat-completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API base URL; `/chat/completions` is appended
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable containing the bearer token
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Model identifier sent with every request
    pub model: String,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.api_key_env
            )),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            model: "x-ai/grok-4-fast:free".to_string(),
        }
    }
}

/// Sampling and timeout settings for the long-form boost flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    pub temperature: f32,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl BoostConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            temperature: 0.75,
            max_tokens: 2000,
            timeout_ms: 30_000,
        }
    }
}

/// Sampling and timeout settings for the short-form generate flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub temperature: f32,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl GenerateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 300,
            timeout_ms: 30_000,
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Origins permitted by the CORS layer
    #[serde(rename = "allowed-origins")]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:5173".to_string(), "http://localhost:3000".to_string()],
        }
    }
}

/// Input screening rules applied before any provider call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPolicyConfig {
    /// Minimum idea length in characters, after trimming
    #[serde(rename = "min-chars")]
    pub min_chars: usize,

    /// Maximum idea length in characters, after trimming
    #[serde(rename = "max-chars")]
    pub max_chars: usize,

    /// Case-insensitive substrings that reject an idea outright
    pub denylist: Vec<String>,
}

impl Default for ContentPolicyConfig {
    fn default() -> Self {
        Self {
            min_chars: 15,
            max_chars: 3000,
            denylist: ["illegal", "harmful", "scam", "fraud"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.api_key_env, "OPENROUTER_API_KEY");
        assert_eq!(config.llm.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.boost.max_tokens, 2000);
        assert_eq!(config.boost.timeout(), Duration::from_secs(30));
        assert_eq!(config.generate.timeout(), Duration::from_secs(30));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.content_policy.min_chars, 15);
        assert_eq!(config.content_policy.max_chars, 3000);
        assert_eq!(config.content_policy.denylist.len(), 4);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug

llm:
  base-url: http://localhost:9000/v1
  api-key-env: MY_API_KEY
  model: openai/gpt-4o-mini

boost:
  temperature: 0.5
  max-tokens: 1500
  timeout-ms: 10000

server:
  port: 9090
  allowed-origins:
    - https://creativefuse.example

content-policy:
  min-chars: 20
  denylist: [spam]
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.llm.model, "openai/gpt-4o-mini");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.boost.max_tokens, 1500);
        assert_eq!(config.boost.timeout(), Duration::from_secs(10));
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.allowed_origins, vec!["https://creativefuse.example"]);
        assert_eq!(config.content_policy.min_chars, 20);
        assert_eq!(config.content_policy.denylist, vec!["spam"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
generate:
  max-tokens: 500
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.generate.max_tokens, 500);

        // Section defaults for unspecified
        assert_eq!(config.generate.temperature, 0.9);
        assert_eq!(config.generate.timeout_ms, 30_000);
        assert_eq!(config.boost.temperature, 0.75);
        assert_eq!(config.content_policy.max_chars, 3000);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log-level: warn\nserver:\n  port: 8123").unwrap();

        let path = file.path().to_path_buf();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/creativefuse.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[serial]
    fn test_validate_requires_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "CF_TEST_MISSING_KEY".to_string();
        unsafe { std::env::remove_var("CF_TEST_MISSING_KEY") };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CF_TEST_MISSING_KEY"));
    }

    #[test]
    #[serial]
    fn test_validate_rejects_blank_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "CF_TEST_BLANK_KEY".to_string();
        unsafe { std::env::set_var("CF_TEST_BLANK_KEY", "   ") };

        assert!(config.validate().is_err());
        unsafe { std::env::remove_var("CF_TEST_BLANK_KEY") };
    }

    #[test]
    #[serial]
    fn test_validate_passes_with_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "CF_TEST_PRESENT_KEY".to_string();
        unsafe { std::env::set_var("CF_TEST_PRESENT_KEY", "sk-test") };

        assert!(config.validate().is_ok());
        assert_eq!(config.llm.api_key().unwrap(), "sk-test");
        unsafe { std::env::remove_var("CF_TEST_PRESENT_KEY") };
    }

    #[test]
    #[serial]
    fn test_validate_rejects_inverted_length_bounds() {
        let mut config = Config::default();
        config.llm.api_key_env = "CF_TEST_BOUNDS_KEY".to_string();
        config.content_policy.min_chars = 100;
        config.content_policy.max_chars = 10;
        unsafe { std::env::set_var("CF_TEST_BOUNDS_KEY", "sk-test") };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min-chars"));
        unsafe { std::env::remove_var("CF_TEST_BOUNDS_KEY") };
    }
}
