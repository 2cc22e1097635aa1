// Analytics engine: domain classification, benchmarking, growth projection,
// impact/effort quadrant analysis, priority ranking, and the static
// skill-development recommendation tables. All functions are pure; the only
// non-arithmetic input is the injectable jitter RNG in the quadrant scorer.
// The one LLM call lives in advisor/; nothing here touches the network.

pub mod benchmark;
pub mod domains;
pub mod growth;
pub mod handlers;
pub mod priority;
pub mod quadrant;
pub mod recommendations;
pub mod report;
