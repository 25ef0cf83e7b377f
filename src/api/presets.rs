use serde::Serialize;

use crate::config::DashboardConfig;

use super::RetailerPayload;

/// Starting assumptions for one retailer in the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerPreset {
    pub name: &'static str,
    pub total_sales: f64,
    pub taxes: f64,
    pub shipping: f64,
    pub local_rate: f64,
    pub local_rate_help: &'static str,
}

pub const BASELINE_RETAILERS: [RetailerPreset; 4] = [
    RetailerPreset {
        name: "FLX Goods",
        total_sales: 60_000.0,
        taxes: 4_500.0,
        shipping: 2_000.0,
        local_rate: 0.90,
        local_rate_help: "Recommended Cornell estimate for FLX Goods (90% local).",
    },
    RetailerPreset {
        name: "Amazon",
        total_sales: 150_000.0,
        taxes: 12_000.0,
        shipping: 8_000.0,
        local_rate: 0.10,
        local_rate_help: "Assumed Amazon local spending rate (10%).",
    },
    RetailerPreset {
        name: "Walmart",
        total_sales: 120_000.0,
        taxes: 9_500.0,
        shipping: 7_000.0,
        local_rate: 0.25,
        local_rate_help: "Example Walmart local rate assumption (25%).",
    },
    RetailerPreset {
        name: "Wegmans",
        total_sales: 90_000.0,
        taxes: 7_200.0,
        shipping: 5_500.0,
        local_rate: 0.35,
        local_rate_help: "Example Wegmans local rate assumption (35%).",
    },
];

/// Defaults for a competitor typed into the free-text box. `name` is left
/// empty and filled from the user's entry.
pub const CUSTOM_COMPETITOR: RetailerPreset = RetailerPreset {
    name: "",
    total_sales: 80_000.0,
    taxes: 6_000.0,
    shipping: 4_000.0,
    local_rate: 0.20,
    local_rate_help: "Adjust this estimate based on how local the competitor is.",
};

impl RetailerPreset {
    pub fn to_payload(&self, name: &str, multiplier: f64) -> RetailerPayload {
        RetailerPayload {
            name: name.to_string(),
            total_sales: Some(self.total_sales),
            taxes: Some(self.taxes),
            shipping: Some(self.shipping),
            local_rate: Some(self.local_rate),
            multiplier: Some(multiplier),
        }
    }
}

/// Splits a comma separated list of competitor names, dropping blanks and
/// any name already taken (case-insensitive) by `existing` or an earlier
/// entry.
pub fn parse_competitor_names<'a>(
    raw: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut seen: Vec<String> = existing.into_iter().map(str::to_lowercase).collect();
    let mut names = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let key = name.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        names.push(name.to_string());
    }
    names
}

/// The baseline retailers followed by each named competitor at the generic
/// defaults.
pub fn default_scenario(config: &DashboardConfig, competitors: &str) -> Vec<RetailerPayload> {
    let multiplier = config.multiplier.default;
    let mut retailers: Vec<RetailerPayload> = BASELINE_RETAILERS
        .iter()
        .map(|preset| preset.to_payload(preset.name, multiplier))
        .collect();
    let custom = parse_competitor_names(
        competitors,
        BASELINE_RETAILERS.iter().map(|preset| preset.name),
    );
    retailers.extend(
        custom
            .iter()
            .map(|name| CUSTOM_COMPETITOR.to_payload(name, multiplier)),
    );
    retailers
}
