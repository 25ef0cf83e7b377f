mod calculator;
mod engine;
mod types;

pub use calculator::{ImpactCalculator, LocalImpactCalculator};
pub use engine::{local_impact_dollars, local_impact_share, retail_impact_base, summarize_retailer};
pub use types::{ErrorKind, ImpactSummary, InputError, InputField, RetailerInputs};
