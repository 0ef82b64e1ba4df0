//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MetricsConfig (validated, immutable)
//!     → owned by the host's startup sequence
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the host restarts to change it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ExpositionConfig;
pub use schema::HistogramConfig;
pub use schema::MetricsConfig;
