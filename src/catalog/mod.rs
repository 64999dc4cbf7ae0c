//! Static catalog of installable agents.
//!
//! The catalog is the only authority on which agent identifiers exist. It is
//! embedded in the binary as TOML and parsed once at startup.
//!
//! # Example
//!
//! ```toml
//! [[agent]]
//! id = "orchestrator"
//! category = "core"
//! icon = "🎯"
//! description = "Coordinates the other agents"
//! role = "Plans the workflow"   # optional
//! ```

pub mod definition;
pub mod registry;

pub use definition::{AgentDescriptor, Category};
pub use registry::{normalize_id, Catalog};
