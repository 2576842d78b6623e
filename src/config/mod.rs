use crate::adapters::http::{
    DEFAULT_PRODUCTS_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USERS_ENDPOINT,
};
use crate::core::ConfigProvider;
use crate::utils::error::{IntegrationError, Result};
use crate::utils::validation::{validate_endpoint, validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "integration-guard")]
#[command(about = "Cross-check a user and a product from public APIs and score the fraud risk")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_USERS_ENDPOINT)]
    pub users_endpoint: String,

    #[arg(long, default_value = DEFAULT_PRODUCTS_ENDPOINT)]
    pub products_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "User id to check; skips the prompt when given with --product-id"
    )]
    pub user_id: Option<i64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Product id to check; skips the prompt when given with --user-id"
    )]
    pub product_id: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Both ids when the run is non-interactive.
    pub fn preset_ids(&self) -> Option<(i64, i64)> {
        self.user_id.zip(self.product_id)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            products_endpoint: DEFAULT_PRODUCTS_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_id: None,
            product_id: None,
            verbose: false,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("users-endpoint", &self.users_endpoint)?;
        validate_endpoint("products-endpoint", &self.products_endpoint)?;
        validate_positive_number("timeout-seconds", self.timeout_seconds, 1)?;

        match (self.user_id, self.product_id) {
            (Some(_), None) => Err(IntegrationError::Config {
                field: "product-id".to_string(),
                value: String::new(),
                reason: "required when --user-id is given".to_string(),
            }),
            (None, Some(_)) => Err(IntegrationError::Config {
                field: "user-id".to_string(),
                value: String::new(),
                reason: "required when --product-id is given".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn users_endpoint(&self) -> &str {
        &self.users_endpoint
    }

    fn products_endpoint(&self) -> &str {
        &self.products_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_validate() {
        let config = CliConfig::parse_from(["integration-guard"]);
        assert_eq!(config.users_endpoint, DEFAULT_USERS_ENDPOINT);
        assert_eq!(config.products_endpoint, DEFAULT_PRODUCTS_ENDPOINT);
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.preset_ids().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_ids() {
        let config = CliConfig::parse_from([
            "integration-guard",
            "--user-id",
            "4",
            "--product-id",
            "7",
        ]);
        assert_eq!(config.preset_ids(), Some((4, 7)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_preset_ids_are_passed_through() {
        let config = CliConfig::parse_from([
            "integration-guard",
            "--user-id",
            "-3",
            "--product-id",
            "2",
        ]);
        assert_eq!(config.preset_ids(), Some((-3, 2)));
    }

    #[test]
    fn test_half_preset_rejected() {
        let config = CliConfig::parse_from(["integration-guard", "--user-id", "4"]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig {
            timeout_seconds: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            users_endpoint: "ftp://example.com/users".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            products_endpoint: "https://fakestoreapi.com/products?sort=desc".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
