use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;
use serde::Serialize;
use thiserror::Error;

const DEFAULT_MULTIPLIER: f64 = 1.6;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--multiplier-min and --multiplier-max must be finite")]
    NonFiniteMultiplierRange,
    #[error("--multiplier-min must be > 0, got {0}")]
    NonPositiveMultiplierMin(f64),
    #[error("--multiplier-min ({min}) cannot exceed --multiplier-max ({max})")]
    InvertedMultiplierRange { min: f64, max: f64 },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), help = "Address to bind")]
    pub bind: IpAddr,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(
        long,
        default_value_t = 1.3,
        help = "Lowest economic multiplier offered by the dashboard slider"
    )]
    pub multiplier_min: f64,
    #[arg(
        long,
        default_value_t = 2.0,
        help = "Highest economic multiplier offered by the dashboard slider"
    )]
    pub multiplier_max: f64,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            multiplier_min: 1.3,
            multiplier_max: 2.0,
        }
    }
}

/// Bounds, step and starting value for one dashboard slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Step sizes for the currency number inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountSteps {
    pub total_sales: f64,
    pub taxes: f64,
    pub shipping: f64,
}

/// Widget configuration shared with the browser through `/api/config`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub sales_label: &'static str,
    pub sales_help: &'static str,
    pub amount_steps: AmountSteps,
    pub local_rate: SliderRange,
    pub multiplier: SliderRange,
    pub multiplier_help: &'static str,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::with_multiplier_range(1.3, 2.0)
    }
}

impl DashboardConfig {
    fn with_multiplier_range(min: f64, max: f64) -> Self {
        Self {
            sales_label: "total sales (NY State $)",
            sales_help: "Use New York State sales estimates for consistency across retailers.",
            amount_steps: AmountSteps {
                total_sales: 1_000.0,
                taxes: 500.0,
                shipping: 250.0,
            },
            local_rate: SliderRange {
                min: 0.0,
                max: 1.0,
                step: 0.05,
                default: 0.6,
            },
            multiplier: SliderRange {
                min,
                max,
                step: 0.05,
                default: DEFAULT_MULTIPLIER.clamp(min, max),
            },
            multiplier_help: "Economic multiplier (Cornell guidance: 1.3-2.0 range).",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub dashboard: DashboardConfig,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = ConfigError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        if !args.multiplier_min.is_finite() || !args.multiplier_max.is_finite() {
            return Err(ConfigError::NonFiniteMultiplierRange);
        }
        if args.multiplier_min <= 0.0 {
            return Err(ConfigError::NonPositiveMultiplierMin(args.multiplier_min));
        }
        if args.multiplier_min > args.multiplier_max {
            return Err(ConfigError::InvertedMultiplierRange {
                min: args.multiplier_min,
                max: args.multiplier_max,
            });
        }

        Ok(Self {
            addr: SocketAddr::new(args.bind, args.port),
            dashboard: DashboardConfig::with_multiplier_range(
                args.multiplier_min,
                args.multiplier_max,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_build_default_dashboard() {
        let config = ServeConfig::try_from(ServeArgs::default()).expect("valid defaults");
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert_eq!(config.dashboard.multiplier.default, 1.6);
    }

    #[test]
    fn multiplier_default_is_clamped_into_configured_range() {
        let args = ServeArgs {
            multiplier_min: 2.0,
            multiplier_max: 5.0,
            ..ServeArgs::default()
        };
        let config = ServeConfig::try_from(args).expect("valid range");
        assert_eq!(config.dashboard.multiplier.min, 2.0);
        assert_eq!(config.dashboard.multiplier.max, 5.0);
        assert_eq!(config.dashboard.multiplier.default, 2.0);
    }

    #[test]
    fn rejects_non_positive_multiplier_min() {
        let args = ServeArgs {
            multiplier_min: 0.0,
            ..ServeArgs::default()
        };
        let err = ServeConfig::try_from(args).expect_err("zero minimum");
        assert_eq!(err, ConfigError::NonPositiveMultiplierMin(0.0));
    }

    #[test]
    fn rejects_inverted_multiplier_range() {
        let args = ServeArgs {
            multiplier_min: 2.5,
            multiplier_max: 1.5,
            ..ServeArgs::default()
        };
        let err = ServeConfig::try_from(args).expect_err("inverted range");
        assert!(err.to_string().contains("--multiplier-max"));
    }

    #[test]
    fn rejects_non_finite_multiplier_range() {
        let args = ServeArgs {
            multiplier_max: f64::INFINITY,
            ..ServeArgs::default()
        };
        let err = ServeConfig::try_from(args).expect_err("infinite max");
        assert_eq!(err, ConfigError::NonFiniteMultiplierRange);
    }
}
