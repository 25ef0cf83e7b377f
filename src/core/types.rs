use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Names of the validated fields on [`RetailerInputs`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Name,
    TotalSales,
    Taxes,
    Shipping,
    LocalRate,
    Multiplier,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::Name => "name",
            InputField::TotalSales => "total_sales",
            InputField::Taxes => "taxes",
            InputField::Shipping => "shipping",
            InputField::LocalRate => "local_rate",
            InputField::Multiplier => "multiplier",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad class of an input failure: a value that is not a usable number at
/// all, or a number outside its declared bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Type,
    Value,
}

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("{0} must be a finite number")]
    NonFinite(InputField),
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: InputField, value: f64 },
    #[error("local_rate must be between 0 and 1, got {0}")]
    LocalRateOutOfRange(f64),
    #[error("multiplier must be > 0, got {0}")]
    NonPositiveMultiplier(f64),
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::NonFinite(_) => ErrorKind::Type,
            InputError::EmptyName
            | InputError::Negative { .. }
            | InputError::LocalRateOutOfRange(_)
            | InputError::NonPositiveMultiplier(_) => ErrorKind::Value,
        }
    }

    pub fn field(&self) -> InputField {
        match self {
            InputError::EmptyName => InputField::Name,
            InputError::NonFinite(field) | InputError::Negative { field, .. } => *field,
            InputError::LocalRateOutOfRange(_) => InputField::LocalRate,
            InputError::NonPositiveMultiplier(_) => InputField::Multiplier,
        }
    }
}

/// Validated financial inputs for one retailer.
///
/// Fields are private so a constructed value always satisfies its bounds;
/// a different scenario means building a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct RetailerInputs {
    name: String,
    total_sales: f64,
    taxes: f64,
    shipping: f64,
    local_rate: f64,
    multiplier: f64,
}

impl RetailerInputs {
    pub fn new(
        name: impl Into<String>,
        total_sales: f64,
        taxes: f64,
        shipping: f64,
        local_rate: f64,
        multiplier: f64,
    ) -> Result<Self, InputError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }

        for (field, value) in [
            (InputField::TotalSales, total_sales),
            (InputField::Taxes, taxes),
            (InputField::Shipping, shipping),
            (InputField::LocalRate, local_rate),
            (InputField::Multiplier, multiplier),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite(field));
            }
        }

        for (field, value) in [
            (InputField::TotalSales, total_sales),
            (InputField::Taxes, taxes),
            (InputField::Shipping, shipping),
        ] {
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }

        if !(0.0..=1.0).contains(&local_rate) {
            return Err(InputError::LocalRateOutOfRange(local_rate));
        }

        if multiplier <= 0.0 {
            return Err(InputError::NonPositiveMultiplier(multiplier));
        }

        Ok(Self {
            name,
            total_sales,
            taxes,
            shipping,
            local_rate,
            multiplier,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_sales(&self) -> f64 {
        self.total_sales
    }

    pub fn taxes(&self) -> f64 {
        self.taxes
    }

    pub fn shipping(&self) -> f64 {
        self.shipping
    }

    pub fn local_rate(&self) -> f64 {
        self.local_rate
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

/// Display-ready result for one retailer. Dollar figures are rounded to
/// cents and the share to four decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub name: String,
    pub total_sales: f64,
    pub taxes: f64,
    pub shipping: f64,
    pub retail_impact_base: f64,
    pub local_rate: f64,
    pub multiplier: f64,
    pub local_impact_dollars: f64,
    pub local_impact_share: f64,
}
