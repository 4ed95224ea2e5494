//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogQuery, PlacementQuery};

/// Number of hotels a placement surface returns when the caller does not
/// ask for a count.
pub const DEFAULT_PLACEMENT_COUNT: usize = 10;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalog: Arc<dyn CatalogQuery>,
    pub placements: Arc<dyn PlacementQuery>,
    pub default_placement_count: usize,
}

impl HttpState {
    /// Construct state with [`DEFAULT_PLACEMENT_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{CatalogPorts, CatalogService, SegmentPolicy, SlotScheduler};
    /// use backend::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// let ports = CatalogPorts::fixtures();
    /// let catalog = CatalogService::new(ports.clone(), SegmentPolicy::default());
    /// let scheduler = SlotScheduler::new(ports, SegmentPolicy::default(), Arc::new(DefaultClock));
    /// let state = HttpState::new(Arc::new(catalog), Arc::new(scheduler));
    /// assert_eq!(state.default_placement_count, 10);
    /// ```
    pub fn new(catalog: Arc<dyn CatalogQuery>, placements: Arc<dyn PlacementQuery>) -> Self {
        Self {
            catalog,
            placements,
            default_placement_count: DEFAULT_PLACEMENT_COUNT,
        }
    }

    /// Override the default placement count.
    #[must_use]
    pub fn with_default_placement_count(mut self, count: usize) -> Self {
        self.default_placement_count = count;
        self
    }
}
