// Unit tests for BookBot

use bookbot::core::{
    format::{truncate_with_ellipsis, CardStyle},
    query::QueryPolicy,
    selector::{filter_high_rated, select_volumes},
    Recommender, Variant,
};
use bookbot::models::{ChatEnvelope, PreferenceRequest, Volume, VolumeInfo};

fn genre_only(genre: &str) -> PreferenceRequest {
    PreferenceRequest {
        genre: Some(genre.to_string()),
        ..Default::default()
    }
}

fn rated_volume(title: &str, rating: Option<f64>) -> Volume {
    Volume {
        id: Some(title.to_lowercase()),
        volume_info: VolumeInfo {
            title: Some(title.to_string()),
            authors: Some(vec!["Jane Doe".to_string(), "John Roe".to_string()]),
            average_rating: rating,
            ratings_count: Some(3),
            description: Some("Short blurb".to_string()),
            info_link: Some(format!("https://books.example/{}", title)),
        },
    }
}

#[test]
fn test_empty_preferences_build_empty_query() {
    let req = PreferenceRequest::default();
    assert_eq!(QueryPolicy::Operators.build(&req), "");
    assert_eq!(QueryPolicy::FreeText.build(&req), "");
}

#[test]
fn test_genre_only_contains_subject_token() {
    let req = genre_only("fiction");
    assert!(QueryPolicy::Operators.build(&req).contains("subject:fiction"));
    assert!(QueryPolicy::FreeText.build(&req).contains("subject:fiction"));
}

#[test]
fn test_operator_query_repeats_subject_for_age() {
    let req = PreferenceRequest {
        genre: Some("mystery".to_string()),
        age: Some("young adult".to_string()),
        ..Default::default()
    };
    assert_eq!(
        QueryPolicy::Operators.build(&req),
        "+subject:mystery+subject:young adult"
    );
}

#[test]
fn test_free_text_query_trims_trailing_space() {
    let req = PreferenceRequest {
        mood: Some("happy".to_string()),
        ..Default::default()
    };
    assert_eq!(QueryPolicy::FreeText.build(&req), "happy");
}

#[test]
fn test_filter_high_rated_threshold() {
    let volumes = vec![
        rated_volume("A", Some(3.99)),
        rated_volume("B", Some(4.0)),
        rated_volume("C", None),
    ];
    let kept = filter_high_rated(volumes);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].volume_info.title.as_deref(), Some("B"));
}

#[test]
fn test_select_without_filter_ignores_ratings() {
    let volumes = vec![rated_volume("A", Some(1.0)), rated_volume("B", None)];
    assert_eq!(select_volumes(volumes, false, 1).len(), 1);
}

#[test]
fn test_detailed_card_joins_authors() {
    let card = CardStyle::Detailed.render(&rated_volume("Joint", Some(4.25)).volume_info, 250);
    assert!(card.starts_with("📚 *Joint* by *Jane Doe, John Roe*\n"));
    assert!(card.contains("⭐ Rating: 4.25 (3 reviews)"));
    assert!(card.ends_with("🔗 [More Info](https://books.example/Joint)"));
}

#[test]
fn test_absent_authors_render_unknown() {
    let info = VolumeInfo {
        title: Some("Orphan".to_string()),
        ..Default::default()
    };
    assert!(CardStyle::Detailed.render(&info, 250).contains("by *Unknown*"));
    assert!(CardStyle::Compact.render(&info, 200).contains("by *Unknown Author*"));
}

#[test]
fn test_truncation_at_exact_limit() {
    let text = "b".repeat(250);
    assert_eq!(truncate_with_ellipsis(&text, 250), format!("{}...", text));

    let longer = "c".repeat(300);
    assert_eq!(truncate_with_ellipsis(&longer, 200), format!("{}...", "c".repeat(200)));
}

#[test]
fn test_compact_description_limit() {
    let info = VolumeInfo {
        title: Some("Long".to_string()),
        description: Some("d".repeat(201)),
        ..Default::default()
    };
    let card = CardStyle::Compact.render(&info, 200);
    assert!(card.contains(&format!("\n\n{}...\n", "d".repeat(200))));
}

#[test]
fn test_recommender_never_returns_empty_for_no_items() {
    for variant in [Variant::Generic, Variant::Webhook] {
        let recommender = Recommender::for_variant(variant);
        match recommender.recommend(&genre_only("fiction"), vec![]) {
            ChatEnvelope::Generic { generic } => assert_eq!(generic.len(), 1),
            ChatEnvelope::Webhook { webhook_result_1 } => assert!(!webhook_result_1.is_empty()),
        }
    }
}

#[test]
fn test_profile_override_changes_selection() {
    let mut profile = Variant::Generic.profile();
    profile.selection_count = 1;
    let recommender = Recommender::new(profile);

    let volumes = vec![rated_volume("A", None), rated_volume("B", None)];
    match recommender.recommend(&PreferenceRequest::default(), volumes) {
        ChatEnvelope::Generic { generic } => assert_eq!(generic.len(), 1),
        other => panic!("unexpected envelope {:?}", other),
    }
}
