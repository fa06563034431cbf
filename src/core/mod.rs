// Core recommendation exports
pub mod format;
pub mod query;
pub mod recommender;
pub mod selector;

pub use format::{truncate_with_ellipsis, CardStyle};
pub use query::QueryPolicy;
pub use recommender::{EnvelopeKind, Recommender, RecommenderProfile, RequestStyle, Variant};
pub use selector::{filter_high_rated, select_volumes, HIGH_RATING_THRESHOLD};
