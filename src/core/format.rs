use crate::models::VolumeInfo;

/// Card layout rendered for one recommended volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Title, authors, rating line, description and link on separate lines
    Detailed,
    /// Title, authors, description and link without rating details
    Compact,
}

impl CardStyle {
    pub fn render(&self, info: &VolumeInfo, description_limit: usize) -> String {
        match self {
            CardStyle::Detailed => render_detailed(info, description_limit),
            CardStyle::Compact => render_compact(info, description_limit),
        }
    }
}

/// Take the first `limit` characters of `text` and always append "..."
///
/// The ellipsis is added even when nothing was cut.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn render_detailed(info: &VolumeInfo, description_limit: usize) -> String {
    // Missing title and link get readable fallbacks rather than a literal "undefined"
    let title = non_empty(&info.title).unwrap_or("Unknown Title");
    let authors = info
        .authors
        .as_ref()
        .map(|a| a.join(", "))
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());
    // A zero rating renders the same as a missing one
    let rating = info
        .average_rating
        .filter(|r| *r != 0.0)
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let reviews = info.ratings_count.unwrap_or(0);
    let description = match non_empty(&info.description) {
        Some(text) => truncate_with_ellipsis(text, description_limit),
        None => "No description...".to_string(),
    };
    let link = info.info_link.as_deref().unwrap_or_default();

    format!(
        "📚 *{}* by *{}*\n⭐ Rating: {} ({} reviews)\n📖 Description: {}\n🔗 [More Info]({})",
        title, authors, rating, reviews, description, link
    )
}

fn render_compact(info: &VolumeInfo, description_limit: usize) -> String {
    let title = non_empty(&info.title).unwrap_or("Unknown Title");
    let authors = match &info.authors {
        Some(authors) => authors.join(", "),
        None => "Unknown Author".to_string(),
    };
    let description = match non_empty(&info.description) {
        Some(text) => truncate_with_ellipsis(text, description_limit),
        None => "No description available.".to_string(),
    };
    let link = info.info_link.as_deref().unwrap_or_default();

    format!(
        "📚 **{}** by *{}*\n\n{}\n[More Info]({})",
        title, authors, description, link
    )
}
