use crate::core::{format::CardStyle, query::QueryPolicy, selector::select_volumes};
use crate::models::{ChatEnvelope, PreferenceRequest, TextCard, Volume};
use serde::Deserialize;
use std::fmt;

/// How the outbound Google Books request is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStyle {
    /// `?q=<query>&maxResults=<n>` appended to the endpoint verbatim
    Raw,
    /// Encoded `q`, `orderBy`, `maxResults`, `printType` and `key` parameters
    Params,
}

/// Response envelope expected by the consuming chat platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// `{ "generic": [ { "response_type": "text", "text": ... } ] }`
    Generic,
    /// `{ "webhook_result_1": ... }`
    Webhook,
}

impl EnvelopeKind {
    pub fn wrap(&self, texts: Vec<String>) -> ChatEnvelope {
        match self {
            EnvelopeKind::Generic => ChatEnvelope::Generic {
                generic: texts.into_iter().map(TextCard::text).collect(),
            },
            EnvelopeKind::Webhook => ChatEnvelope::Webhook {
                webhook_result_1: texts.join("\n\n"),
            },
        }
    }
}

/// Named presets for the two chat integrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Generic,
    Webhook,
}

impl Variant {
    pub fn default_port(&self) -> u16 {
        match self {
            Variant::Generic => 3000,
            Variant::Webhook => 3001,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Generic => "generic",
            Variant::Webhook => "webhook",
        }
    }

    pub fn profile(&self) -> RecommenderProfile {
        match self {
            Variant::Generic => RecommenderProfile {
                variant: *self,
                query_policy: QueryPolicy::Operators,
                request_style: RequestStyle::Raw,
                max_results: 5,
                high_rating_filter: true,
                selection_count: 2,
                description_limit: 250,
                card_style: CardStyle::Detailed,
                envelope: EnvelopeKind::Generic,
                no_results_message:
                    "Sorry 😢, I couldn't find any books matching your preferences.".to_string(),
                failure_message: "Oops! Something went wrong while fetching book suggestions 😓"
                    .to_string(),
            },
            Variant::Webhook => RecommenderProfile {
                variant: *self,
                query_policy: QueryPolicy::FreeText,
                request_style: RequestStyle::Params,
                max_results: 5,
                high_rating_filter: false,
                selection_count: 1,
                description_limit: 200,
                card_style: CardStyle::Compact,
                envelope: EnvelopeKind::Webhook,
                no_results_message:
                    "😕 Sorry, I couldn't find a good match. Try changing your preferences?"
                        .to_string(),
                failure_message:
                    "🚨 Oops! Something went wrong while getting your book. Please try again later."
                        .to_string(),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every knob that differs between chat integrations
#[derive(Debug, Clone)]
pub struct RecommenderProfile {
    pub variant: Variant,
    pub query_policy: QueryPolicy,
    pub request_style: RequestStyle,
    pub max_results: u8,
    pub high_rating_filter: bool,
    pub selection_count: usize,
    pub description_limit: usize,
    pub card_style: CardStyle,
    pub envelope: EnvelopeKind,
    pub no_results_message: String,
    pub failure_message: String,
}

/// Turns preferences into a query and search results into a chat envelope
///
/// Holds no mutable state; one instance is shared by every worker.
#[derive(Debug, Clone)]
pub struct Recommender {
    profile: RecommenderProfile,
}

impl Recommender {
    pub fn new(profile: RecommenderProfile) -> Self {
        Self { profile }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.profile())
    }

    pub fn profile(&self) -> &RecommenderProfile {
        &self.profile
    }

    pub fn build_query(&self, request: &PreferenceRequest) -> String {
        self.profile.query_policy.build(request)
    }

    /// Shape search results into the response envelope
    ///
    /// An empty result set yields the "no results" message. When the
    /// high-rating filter removes every volume the envelope is built from
    /// the empty selection instead (`{"generic": []}` for the generic
    /// envelope).
    pub fn recommend(&self, request: &PreferenceRequest, volumes: Vec<Volume>) -> ChatEnvelope {
        if volumes.is_empty() {
            return self.no_results();
        }

        let high_rating_only = self.profile.high_rating_filter && request.wants_high_rating();
        let selected = select_volumes(volumes, high_rating_only, self.profile.selection_count);

        let texts = selected
            .iter()
            .map(|v| {
                self.profile
                    .card_style
                    .render(&v.volume_info, self.profile.description_limit)
            })
            .collect();

        self.profile.envelope.wrap(texts)
    }

    pub fn no_results(&self) -> ChatEnvelope {
        self.profile
            .envelope
            .wrap(vec![self.profile.no_results_message.clone()])
    }

    pub fn failure(&self) -> ChatEnvelope {
        self.profile
            .envelope
            .wrap(vec![self.profile.failure_message.clone()])
    }
}
