use super::engine::summarize_retailer;
use super::types::{ImpactSummary, RetailerInputs};

/// The one entry point the dashboard computes through.
///
/// Implementations are shared across request handlers, so they must be pure
/// with respect to their inputs.
pub trait ImpactCalculator: Send + Sync {
    fn summarize(&self, inputs: &RetailerInputs) -> ImpactSummary;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalImpactCalculator;

impl ImpactCalculator for LocalImpactCalculator {
    fn summarize(&self, inputs: &RetailerInputs) -> ImpactSummary {
        summarize_retailer(inputs)
    }
}
