use super::types::{ImpactSummary, RetailerInputs};

/// Sales less half of taxes and all shipping. Not clamped; may be negative.
pub fn retail_impact_base(total_sales: f64, taxes: f64, shipping: f64) -> f64 {
    total_sales - 0.5 * taxes - shipping
}

/// Local impact in dollars. A negative impact base counts as zero impact.
pub fn local_impact_dollars(
    total_sales: f64,
    taxes: f64,
    shipping: f64,
    local_rate: f64,
    multiplier: f64,
) -> f64 {
    let base = retail_impact_base(total_sales, taxes, shipping);
    base.max(0.0) * local_rate * multiplier
}

/// Local impact as a fraction of sales, zero when there are no sales.
///
/// The result is not bounded to `[0, 1]`: a multiplier above `1 / local_rate`
/// pushes it past 1.
pub fn local_impact_share(
    total_sales: f64,
    taxes: f64,
    shipping: f64,
    local_rate: f64,
    multiplier: f64,
) -> f64 {
    if total_sales <= 0.0 {
        return 0.0;
    }
    local_impact_dollars(total_sales, taxes, shipping, local_rate, multiplier) / total_sales
}

pub fn summarize_retailer(inputs: &RetailerInputs) -> ImpactSummary {
    let base = retail_impact_base(inputs.total_sales(), inputs.taxes(), inputs.shipping());
    let dollars = local_impact_dollars(
        inputs.total_sales(),
        inputs.taxes(),
        inputs.shipping(),
        inputs.local_rate(),
        inputs.multiplier(),
    );
    let share = if inputs.total_sales() > 0.0 {
        dollars / inputs.total_sales()
    } else {
        0.0
    };

    ImpactSummary {
        name: inputs.name().to_string(),
        total_sales: round_to(inputs.total_sales(), 2),
        taxes: round_to(inputs.taxes(), 2),
        shipping: round_to(inputs.shipping(), 2),
        retail_impact_base: round_to(base, 2),
        local_rate: inputs.local_rate(),
        multiplier: inputs.multiplier(),
        local_impact_dollars: round_to(dollars, 2),
        local_impact_share: round_to(share, 4),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    // Values this large carry no fractional digits to round.
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // Keep -0.0 out of display output.
    if rounded == 0.0 { 0.0 } else { rounded }
}
