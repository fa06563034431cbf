use serde::{Deserialize, Serialize};

/// Body of a Google Books `volumes` search response
///
/// Google omits `items` entirely when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumesResponse {
    #[serde(rename = "totalItems", default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

impl VolumesResponse {
    pub fn into_volumes(self) -> Vec<Volume> {
        self.items.unwrap_or_default()
    }
}

/// One book record as returned by Google Books
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

/// The subset of `volumeInfo` used to render response cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "averageRating", default)]
    pub average_rating: Option<f64>,
    #[serde(rename = "ratingsCount", default)]
    pub ratings_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "infoLink", default)]
    pub info_link: Option<String>,
}

impl VolumeInfo {
    /// Rating used by the high-rating filter; absent ratings never qualify
    pub fn rated_at_least(&self, threshold: f64) -> bool {
        self.average_rating.map_or(false, |r| r >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_items_is_empty() {
        let body: VolumesResponse = serde_json::from_str(r#"{"kind":"books#volumes","totalItems":0}"#).unwrap();
        assert!(body.into_volumes().is_empty());
    }

    #[test]
    fn test_missing_volume_info_defaults() {
        let body: VolumesResponse = serde_json::from_str(r#"{"items":[{"id":"abc"}]}"#).unwrap();
        let volumes = body.into_volumes();
        assert_eq!(volumes.len(), 1);
        assert!(volumes[0].volume_info.title.is_none());
        assert!(!volumes[0].volume_info.rated_at_least(4.0));
    }

    #[test]
    fn test_camel_case_fields() {
        let info: VolumeInfo = serde_json::from_str(
            r#"{"title":"Dune","authors":["Frank Herbert"],"averageRating":4.5,"ratingsCount":120,"infoLink":"http://x"}"#,
        )
        .unwrap();
        assert_eq!(info.average_rating, Some(4.5));
        assert_eq!(info.ratings_count, Some(120));
        assert_eq!(info.info_link.as_deref(), Some("http://x"));
        assert!(info.rated_at_least(4.0));
    }
}
