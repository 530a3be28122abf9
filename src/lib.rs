//! # Sluice
//!
//! A bounded-concurrency URL fan-out fetcher.
//!
//! Sluice resolves a seed URL into a list of target URLs, then retrieves
//! every target concurrently under an explicit concurrency ceiling,
//! collecting the outcomes into a stable, index-addressable result set:
//!
//! ```text
//! fetch_list(seed) → Vec<TargetSpec> → fetch_all(targets, k) → ResultSet
//! ```
//!
//! Per-request failures are isolated: a refused connection or timeout on one
//! target is recorded in that target's slot and never disturbs its siblings.
//! Every submitted target produces exactly one [`FetchResult`](domain::FetchResult),
//! and the returned [`ResultSet`](domain::ResultSet) is ordered by index, not
//! by completion time.
//!
//! ## Modules
//!
//! - [`app`]: crate-wide error type and `Result` alias
//! - [`config`]: recognized fetch options and the body-decode policy
//! - [`domain`]: core domain models (TargetSpec, FetchResult, ResultSet)
//! - [`fetcher`]: the transport seam, the reqwest transport, and the
//!   semaphore-bounded fan-out core

pub mod app;
pub mod config;
pub mod domain;
pub mod fetcher;
