//! Installing agent documents into a project.
//!
//! - `state`: which agents are already present on disk
//! - `fetcher`: single best-effort download of an agent document
//! - `writer`: mirrored write into the primary and compatibility directories
//! - `prompt`: overwrite confirmation capability
//! - `reconciler`: per-agent install / skip / overwrite decisions

pub mod fetcher;
pub mod prompt;
pub mod reconciler;
pub mod state;
pub mod writer;

pub use fetcher::{agent_url, FetchFailure, Fetcher, HttpFetcher};
pub use prompt::{AlwaysConfirm, Confirm, LineConfirm};
pub use reconciler::{Outcome, Reconciler, Report, Summary};
pub use state::InstallState;
pub use writer::{write_agent, WriteFailure};
