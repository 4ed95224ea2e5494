//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::domain::SegmentPolicy;
use backend::inbound::http::state::DEFAULT_PLACEMENT_COUNT;
use backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) segment_policy: SegmentPolicy,
    pub(crate) default_placement_count: usize,
}

impl ServerConfig {
    /// Listen on `bind_addr` with fixture ports, the default segment policy
    /// and the default placement count.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            segment_policy: SegmentPolicy::default(),
            default_placement_count: DEFAULT_PLACEMENT_COUNT,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool every driven port is served by its empty fixture.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Select which company code maps to the restricted segment.
    #[must_use]
    pub fn with_segment_policy(mut self, policy: SegmentPolicy) -> Self {
        self.segment_policy = policy;
        self
    }

    /// Hotels per placement surface when a request omits `count`.
    #[must_use]
    pub fn with_default_placement_count(mut self, count: usize) -> Self {
        self.default_placement_count = count;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
