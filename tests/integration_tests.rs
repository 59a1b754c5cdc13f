use quiz_social::models::domain::{QuizDocument, QuizRecord, UserProfile};

#[test]
fn store_quiz_payload_parses_with_unknown_fields() {
    let raw = serde_json::json!({
        "createdByUserId": "user-b",
        "name": "World Capitals",
        "title": "Guess the capital",
        "questionCount": 10,
        "isPublished": true,
    });

    let document: QuizDocument = serde_json::from_value(raw).expect("payload should parse");
    assert_eq!(document.created_by_user_id.as_deref(), Some("user-b"));
    assert_eq!(document.name.as_deref(), Some("World Capitals"));
    assert_eq!(
        document.extra.get("questionCount"),
        Some(&serde_json::json!(10))
    );

    let record = QuizRecord::from_document("-Nq1x", &document).expect("creator is present");
    assert_eq!(record.id, "-Nq1x");

    let serialized = serde_json::to_value(&record).expect("record should serialize");
    assert_eq!(serialized["createdByUserId"], "user-b");
    assert_eq!(serialized["isPublished"], true);
}

#[test]
fn store_quiz_payload_without_creator_still_parses() {
    let raw = serde_json::json!({
        "name": "Orphaned Quiz",
        "legacyField": "kept opaque",
    });

    let document: QuizDocument = serde_json::from_value(raw).expect("payload should parse");
    assert_eq!(document.created_by_user_id, None);
    assert!(QuizRecord::from_document("q", &document).is_none());
}

#[test]
fn store_profile_payload_parses_camel_case_fields() {
    let raw = serde_json::json!({
        "userId": "user-b",
        "name": "Bala",
        "email": "bala@example.com",
        "desc": "Loves geography",
        "profilePicUri": "https://cdn.example.com/bala.png",
        "joinedOn": 1650000000,
    });

    let profile: UserProfile = serde_json::from_value(raw).expect("payload should parse");
    assert_eq!(profile.user_id.as_deref(), Some("user-b"));
    assert_eq!(profile.desc.as_deref(), Some("Loves geography"));
    assert_eq!(
        profile.profile_pic_uri.as_deref(),
        Some("https://cdn.example.com/bala.png")
    );
    assert_eq!(
        profile.extra.get("joinedOn"),
        Some(&serde_json::json!(1650000000))
    );
    assert!(profile.is_current_user("user-b"));
}
