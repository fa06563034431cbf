//! BookBot - book recommendation backend for chatbot webhooks
//!
//! Turns structured book preferences into a Google Books search and shapes
//! the top results into the response envelope a chat platform expects.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CardStyle, QueryPolicy, Recommender, RecommenderProfile, Variant};
pub use models::{ChatEnvelope, PreferenceRequest, TextCard, Volume, VolumeInfo};
