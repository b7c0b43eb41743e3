use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::settings::{DEFAULT_ELECTRICITY_PRICE, DEFAULT_POWER_CORRECTION_FACTOR};
use crate::models::DeviceCorrectionSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

fn default_api_host() -> String {
    "0.0.0.0".into()
}

fn default_api_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    /// Account whose device settings hold the correction factors
    pub account_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Used when the backend cannot provide device settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_power_correction_factor")]
    pub power_correction_factor: f64,
    #[serde(default = "default_electricity_price")]
    pub electricity_price: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            power_correction_factor: default_power_correction_factor(),
            electricity_price: default_electricity_price(),
        }
    }
}

impl DefaultsConfig {
    pub fn settings(&self) -> DeviceCorrectionSettings {
        DeviceCorrectionSettings {
            power_correction_factor: self.power_correction_factor,
            electricity_price: self.electricity_price,
        }
    }
}

fn default_power_correction_factor() -> f64 {
    DEFAULT_POWER_CORRECTION_FACTOR
}

fn default_electricity_price() -> f64 {
    DEFAULT_ELECTRICITY_PRICE
}

impl Config {
    /// Load YAML from disk, substitute $(VAR)/${VAR} with env vars, then parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)?;
        let mut cfg = Self::parse(&raw)?;

        // Optional: allow BACKEND_URL env to override whatever YAML had
        if let Ok(url) = std::env::var("BACKEND_URL") {
            cfg.backend.base_url = url;
        }

        Ok(cfg)
    }

    /// Parse YAML text after env placeholder expansion and validate it.
    pub fn parse(raw: &str) -> Result<Self, anyhow::Error> {
        let expanded = expand_env_placeholders(raw)?;
        let cfg: Self = serde_yaml::from_str(&expanded)?;

        if !cfg.defaults.settings().is_valid() {
            anyhow::bail!(
                "defaults out of range: power_correction_factor must be in (0, 10], electricity_price in (0, 1]"
            );
        }

        Ok(cfg)
    }
}

/// Expand $(VAR) and ${VAR} placeholders using environment variables.
fn expand_env_placeholders(input: &str) -> Result<String, anyhow::Error> {
    use anyhow::Context;

    let mut out = String::with_capacity(input.len());
    let mut it = input.chars().peekable();

    while let Some(c) = it.next() {
        if c == '$' {
            match it.peek().copied() {
                Some('$') => {
                    // Escape "$$" -> "$"
                    it.next();
                    out.push('$');
                }
                Some(open @ ('(' | '{')) => {
                    it.next();
                    let close = if open == '(' { ')' } else { '}' };
                    let var = read_until(&mut it, close).with_context(|| {
                        format!("unterminated env placeholder: missing '{}'", close)
                    })?;
                    let val = std::env::var(&var)
                        .with_context(|| format!("missing environment variable: {}", var))?;
                    out.push_str(&val);
                }
                _ => {
                    // Not a placeholder; keep the '$' as-is
                    out.push('$');
                }
            }
        } else {
            out.push(c);
        }
    }

    Ok(out)
}

/// Read characters until we hit `end`, returning the collected string.
fn read_until<I>(it: &mut std::iter::Peekable<I>, end: char) -> Option<String>
where
    I: Iterator<Item = char>,
{
    let mut buf = String::new();
    for ch in it.by_ref() {
        if ch == end {
            return Some(buf);
        }
        buf.push(ch);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_expand_env_placeholders() {
        std::env::set_var("CONSUMPTION_TEST_HOST", "backend.local");
        std::env::set_var("CONSUMPTION_TEST_PORT", "5000");

        let out =
            expand_env_placeholders("http://$(CONSUMPTION_TEST_HOST):${CONSUMPTION_TEST_PORT}")
                .unwrap();
        assert_eq!(out, "http://backend.local:5000");
    }

    #[test]
    fn test_expand_keeps_plain_dollars() {
        assert_eq!(expand_env_placeholders("cost $$5 $x").unwrap(), "cost $5 $x");
    }

    #[test]
    fn test_expand_missing_variable_fails() {
        assert_err!(expand_env_placeholders("$(CONSUMPTION_TEST_SURELY_UNSET)"));
        assert_err!(expand_env_placeholders("${UNTERMINATED"));
    }

    #[test]
    fn test_parse_applies_defaults() {
        let cfg = assert_ok!(Config::parse(
            r#"
backend:
  base_url: http://backend.local:5000
  account_id: acc-1
"#
        ));

        assert_eq!(cfg.api.host, "0.0.0.0");
        assert_eq!(cfg.api.port, 8080);
        assert_eq!(cfg.backend.timeout_secs, 10);
        assert_eq!(cfg.defaults.power_correction_factor, 1.0);
        assert_eq!(cfg.defaults.electricity_price, 0.30);
    }

    #[test]
    fn test_parse_rejects_out_of_range_defaults() {
        assert_err!(Config::parse(
            r#"
backend:
  base_url: http://backend.local:5000
  account_id: acc-1
defaults:
  power_correction_factor: 12.0
"#
        ));
    }
}
