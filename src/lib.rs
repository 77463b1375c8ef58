//! Deterministic unit-economics engine.
//!
//! Pure numeric models that turn raw business inputs into lifetime value,
//! acquisition cost, payback and offer-strength judgments, plus comparisons
//! against industry reference tables. Every entry point is a synchronous,
//! side-effect-free function and can be called from any number of threads.

// Export modules for library usage
pub mod benchmark;
pub mod cohort;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod observability;
pub mod offer;
pub mod rounding;

// Re-export commonly used types
pub use crate::errors::{Error, Result, ResultExt};

pub use crate::metrics::{
    calculate_business_metrics, calculate_cac, calculate_ltv, calculate_monthly_gross_profit,
    calculate_payback_period, calculate_ratio, get_rating_tier, BusinessMetricsInput,
    BusinessMetricsOutput, RatingTier,
};

pub use crate::cohort::{
    simulate_cac_payback, CacPaybackResults, CohortMonth, CohortPaybackInput, CohortSimulator,
    LtvMethod, PaybackMonth, SimplePayback,
};

pub use crate::offer::{
    analyze_offer, get_offer_rating, OfferAnalysis, OfferRating, OfferScorer, OfferStack,
    OfferTier,
};

pub use crate::benchmark::{
    benchmark_ltv_cac_ratio, benchmark_payback, compare_to_benchmark, BenchmarkComparison,
    BenchmarkTier, Industry, IndustryBenchmark, IndustryBenchmarks, MetricDirection,
};

pub use crate::config::{load_config, EngineConfig};

pub use crate::observability::init_tracing;
