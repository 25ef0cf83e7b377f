//! Plain-text and JSON summaries for a fixed sample scenario, used by the
//! `report` command.

use crate::api::{format_dollars, format_percent};
use crate::core::{ImpactCalculator, ImpactSummary, InputError, RetailerInputs};

/// Four retailers at identical sales so their local impact compares directly.
pub fn sample_retailers() -> Result<Vec<RetailerInputs>, InputError> {
    Ok(vec![
        RetailerInputs::new("FLX Goods", 100_000.0, 8_000.0, 5_000.0, 0.70, 1.7)?,
        RetailerInputs::new("Amazon", 100_000.0, 8_000.0, 7_000.0, 0.10, 1.4)?,
        RetailerInputs::new("Walmart", 100_000.0, 8_000.0, 6_000.0, 0.20, 1.4)?,
        RetailerInputs::new("Wegmans", 100_000.0, 8_000.0, 6_000.0, 0.30, 1.5)?,
    ])
}

pub fn summarize_all(
    calculator: &dyn ImpactCalculator,
    retailers: &[RetailerInputs],
) -> Vec<ImpactSummary> {
    retailers.iter().map(|r| calculator.summarize(r)).collect()
}

pub fn render_text(summaries: &[ImpactSummary]) -> String {
    summaries
        .iter()
        .map(|s| {
            format!(
                "{}: Local impact = {} ({} of each $1)\n",
                s.name,
                format_dollars(s.local_impact_dollars),
                format_percent(s.local_impact_share)
            )
        })
        .collect()
}
