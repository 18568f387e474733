//! Route optimization engine for theme-park navigation.
//!
//! The park is modelled as an undirected graph of attractions connected by
//! walkways. Live queue telemetry re-weights traversal costs per request
//! (walking time plus the wait at the destination), a Dijkstra search finds
//! the cheapest itinerary, and a projector turns the result into a
//! renderable scene for the UI layer.

pub mod error;
pub mod feed;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod scene;

pub use error::Error;

/// All durations in the engine are integer minutes.
pub type Minutes = u32;

/// Wait applied when an attraction has no telemetry match.
///
/// The production feed is patchy; this keeps unmatched attractions routable
/// instead of dropping them from planning. Overridable per deployment via
/// [`loading::ParkModelConfig`].
pub const DEFAULT_WAIT_MINUTES: Minutes = 10;

/// How long a fetched wait snapshot stays fresh before the feed is re-read.
pub const DEFAULT_FEED_TTL_SECS: u64 = 60;
