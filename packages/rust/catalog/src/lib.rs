//! Blueprint catalog providers.
//!
//! A [`BlueprintProvider`] answers one question: which blueprints match a
//! wildcard filter. Two implementations ship here:
//! - [`HttpBlueprintProvider`] queries a running simulator.
//! - [`SnapshotProvider`] reads a JSON dump of a previous catalog response.

mod filter;
mod http;
mod snapshot;

use std::future::Future;

use bpdocs_shared::{BlueprintRecord, Result};

pub use filter::BlueprintFilter;
pub use http::{HttpBlueprintProvider, ProviderOptions};
pub use snapshot::SnapshotProvider;

/// Source of blueprint records.
pub trait BlueprintProvider {
    /// Where the catalog comes from, for logs and diagnostics.
    fn describe(&self) -> String;

    /// Every blueprint whose identifier matches `filter` (`*` for all).
    ///
    /// Fails with [`bpdocs_shared::BpDocsError::Connection`] when the source
    /// cannot be reached in time.
    fn blueprints(&self, filter: &str) -> impl Future<Output = Result<Vec<BlueprintRecord>>>;
}
