use crate::config::{DEFAULT_PINTEREST_ENDPOINT, DEFAULT_RESULT_LIMIT, DEFAULT_WEB_ENDPOINT, OUTPUT_FORMATS};
use crate::domain::ports::SearchConfig;
use crate::fit::MeasurementProfile;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fitroom")]
#[command(about = "Search clothing images and fit them to a mannequin measurement profile")]
pub struct CliConfig {
    /// Search query, e.g. "summer dress"
    #[arg(long)]
    pub query: String,

    /// Body measurements in centimeters; unspecified ones use the
    /// reference mannequin values
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long)]
    pub bust: Option<f64>,

    #[arg(long)]
    pub waist: Option<f64>,

    #[arg(long)]
    pub hips: Option<f64>,

    #[arg(long)]
    pub inseam: Option<f64>,

    #[arg(long)]
    pub shoulders: Option<f64>,

    #[arg(long, default_value = DEFAULT_WEB_ENDPOINT)]
    pub web_endpoint: String,

    /// Web search API key (falls back to GOOGLE_API_KEY)
    #[arg(long)]
    pub web_api_key: Option<String>,

    /// Web search engine id (falls back to GOOGLE_SEARCH_ENGINE_ID)
    #[arg(long)]
    pub web_engine_id: Option<String>,

    #[arg(long, default_value = DEFAULT_PINTEREST_ENDPOINT)]
    pub pinterest_endpoint: String,

    /// Pinterest access token (falls back to PINTEREST_ACCESS_TOKEN)
    #[arg(long)]
    pub pinterest_token: Option<String>,

    /// Results requested per provider
    #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
    pub limit: usize,

    /// Output format: json or csv
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Read provider settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill unset credentials from the environment, using the variable names
    /// the hosted app uses.
    pub fn apply_env_defaults(&mut self) {
        if self.web_api_key.is_none() {
            self.web_api_key = std::env::var("GOOGLE_API_KEY").ok();
        }
        if self.web_engine_id.is_none() {
            self.web_engine_id = std::env::var("GOOGLE_SEARCH_ENGINE_ID").ok();
        }
        if self.pinterest_token.is_none() {
            self.pinterest_token = std::env::var("PINTEREST_ACCESS_TOKEN").ok();
        }
    }

    pub fn measurement_profile(&self) -> MeasurementProfile {
        MeasurementProfile {
            height: self.height,
            bust: self.bust,
            waist: self.waist,
            hips: self.hips,
            inseam: self.inseam,
            shoulders: self.shoulders,
        }
    }
}

impl SearchConfig for CliConfig {
    fn web_endpoint(&self) -> &str {
        &self.web_endpoint
    }

    fn web_api_key(&self) -> Option<&str> {
        self.web_api_key.as_deref()
    }

    fn web_engine_id(&self) -> Option<&str> {
        self.web_engine_id.as_deref()
    }

    fn pinterest_endpoint(&self) -> &str {
        &self.pinterest_endpoint
    }

    fn pinterest_token(&self) -> Option<&str> {
        self.pinterest_token.as_deref()
    }

    fn result_limit(&self) -> usize {
        self.limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("query", &self.query)?;
        validation::validate_url("web_endpoint", &self.web_endpoint)?;
        validation::validate_url("pinterest_endpoint", &self.pinterest_endpoint)?;
        validation::validate_positive_number("limit", self.limit, 1)?;
        validation::validate_one_of("format", &self.format, OUTPUT_FORMATS)?;
        Ok(())
    }
}
