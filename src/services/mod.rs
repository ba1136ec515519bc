//! Core services: the analysis pipeline, parameter mapping, validation,
//! and the TTL cache backing the history provider.

pub mod analysis;
pub mod cache;
pub mod mapper;
pub mod validator;

pub use analysis::{analyze_series, DataError, DEFAULT_SPIKE_THRESHOLD};
pub use cache::Cache;
pub use mapper::{ParameterMapper, ReasoningProvider};
pub use validator::normalize;
