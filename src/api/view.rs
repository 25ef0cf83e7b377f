use serde::Serialize;

use crate::core::ImpactSummary;

/// One metric card: share of sales as the headline, dollars underneath.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub local_impact_dollars: f64,
    pub local_impact_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub category_label: &'static str,
    pub value_label: &'static str,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

pub fn build_kpis(summaries: &[ImpactSummary]) -> Vec<KpiCard> {
    summaries
        .iter()
        .map(|summary| KpiCard {
            label: format!("{} local impact", summary.name),
            value: format!("{} of sales", format_percent(summary.local_impact_share)),
            delta: format!(
                "{} local impact",
                format_dollars(summary.local_impact_dollars)
            ),
            local_impact_dollars: summary.local_impact_dollars,
            local_impact_share: summary.local_impact_share,
        })
        .collect()
}

pub fn build_chart(summaries: &[ImpactSummary]) -> ChartSeries {
    ChartSeries {
        category_label: "Retailer",
        value_label: "Local impact ($)",
        categories: summaries.iter().map(|s| s.name.clone()).collect(),
        values: summaries.iter().map(|s| s.local_impact_dollars).collect(),
    }
}

/// Formats a fraction as a percentage with one decimal, e.g. `0.1451` as
/// `14.5%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Whole dollars with thousands separators, e.g. `$80,280`.
pub fn format_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
