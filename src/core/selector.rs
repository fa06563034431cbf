use crate::models::Volume;

/// Minimum `averageRating` kept when a caller asks for highly rated books
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// Keep only volumes rated at or above [`HIGH_RATING_THRESHOLD`]
///
/// The result may be empty; callers do not fall back to the unfiltered list.
pub fn filter_high_rated(volumes: Vec<Volume>) -> Vec<Volume> {
    volumes
        .into_iter()
        .filter(|v| v.volume_info.rated_at_least(HIGH_RATING_THRESHOLD))
        .collect()
}

/// Pick the top `count` volumes, optionally applying the high-rating filter first
pub fn select_volumes(volumes: Vec<Volume>, high_rating_only: bool, count: usize) -> Vec<Volume> {
    let candidates = if high_rating_only {
        filter_high_rated(volumes)
    } else {
        volumes
    };

    candidates.into_iter().take(count).collect()
}
