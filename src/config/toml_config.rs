use crate::config::{DEFAULT_PINTEREST_ENDPOINT, DEFAULT_RESULT_LIMIT, DEFAULT_WEB_ENDPOINT, OUTPUT_FORMATS};
use crate::domain::ports::SearchConfig;
use crate::utils::error::{FitRoomError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub app: AppConfig,
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub web: WebProviderConfig,
    #[serde(default)]
    pub pinterest: PinterestProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebProviderConfig {
    #[serde(default = "default_web_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestProviderConfig {
    #[serde(default = "default_pinterest_endpoint")]
    pub endpoint: String,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub result_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

fn default_web_endpoint() -> String {
    DEFAULT_WEB_ENDPOINT.to_string()
}

fn default_pinterest_endpoint() -> String {
    DEFAULT_PINTEREST_ENDPOINT.to_string()
}

impl Default for WebProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_web_endpoint(),
            api_key: None,
            engine_id: None,
        }
    }
}

impl Default for PinterestProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_pinterest_endpoint(),
            access_token: None,
        }
    }
}

/// A credential whose `${VAR}` placeholder was never resolved counts as
/// unset, so a missing environment variable skips the provider instead of
/// sending the literal placeholder upstream.
fn credential(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !v.starts_with("${"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FitRoomError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FitRoomError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` occurrences with the environment value; unset
    /// variables keep the literal placeholder.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("providers.web.endpoint", &self.providers.web.endpoint)?;
        validation::validate_url(
            "providers.pinterest.endpoint",
            &self.providers.pinterest.endpoint,
        )?;

        if let Some(limit) = self.search.result_limit {
            validation::validate_positive_number("search.result_limit", limit, 1)?;
        }

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("json")
    }
}

impl SearchConfig for TomlConfig {
    fn web_endpoint(&self) -> &str {
        &self.providers.web.endpoint
    }

    fn web_api_key(&self) -> Option<&str> {
        credential(&self.providers.web.api_key)
    }

    fn web_engine_id(&self) -> Option<&str> {
        credential(&self.providers.web.engine_id)
    }

    fn pinterest_endpoint(&self) -> &str {
        &self.providers.pinterest.endpoint
    }

    fn pinterest_token(&self) -> Option<&str> {
        credential(&self.providers.pinterest.access_token)
    }

    fn result_limit(&self) -> usize {
        self.search.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
