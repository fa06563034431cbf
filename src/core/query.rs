use crate::models::PreferenceRequest;

/// How preference fields are turned into a Google Books `q` string
///
/// Field values are inserted verbatim, without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPolicy {
    /// `+subject:<genre>+intitle:<mood>+inauthor:<author>+subject:<age>`
    Operators,
    /// `subject:<genre> inauthor:<author> <mood> <age>`
    FreeText,
}

impl QueryPolicy {
    /// Build the search query for a preference request
    ///
    /// Returns an empty string when no field is present; Google Books then
    /// falls back to an unfiltered relevance search.
    pub fn build(&self, request: &PreferenceRequest) -> String {
        match self {
            QueryPolicy::Operators => build_operator_query(request),
            QueryPolicy::FreeText => build_free_text_query(request),
        }
    }
}

#[inline]
fn build_operator_query(request: &PreferenceRequest) -> String {
    let mut query = String::new();

    if let Some(genre) = &request.genre {
        query.push_str("+subject:");
        query.push_str(genre);
    }
    if let Some(mood) = &request.mood {
        query.push_str("+intitle:");
        query.push_str(mood);
    }
    if let Some(author) = &request.author {
        query.push_str("+inauthor:");
        query.push_str(author);
    }
    if let Some(age) = &request.age {
        query.push_str("+subject:");
        query.push_str(age);
    }

    query.trim().to_string()
}

#[inline]
fn build_free_text_query(request: &PreferenceRequest) -> String {
    let mut query = String::new();

    if let Some(genre) = &request.genre {
        query.push_str(&format!("subject:{} ", genre));
    }
    if let Some(author) = &request.author {
        query.push_str(&format!("inauthor:{} ", author));
    }
    if let Some(mood) = &request.mood {
        query.push_str(&format!("{} ", mood));
    }
    if let Some(age) = &request.age {
        query.push_str(&format!("{} ", age));
    }

    query.trim().to_string()
}
