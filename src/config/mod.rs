//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, via RELAY_CONFIG)
//!     → loader.rs (parse & deserialize, defaults for absent fields)
//!     → loader.rs (environment overlay: SERVICE_2_URL, BIND_ADDRESS)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the handler state
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there are no reload semantics
//! - All fields have defaults so the service runs with no config at all
//! - The environment wins over the file, matching container deployments
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{DownstreamConfig, ListenerConfig, RelayConfig, TimeoutConfig};
