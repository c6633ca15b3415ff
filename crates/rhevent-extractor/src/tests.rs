//! Tests for event reference extraction

use crate::{extract_event_id, extract_event_ids, extract_event_path};

const JS_SNIPPET: &str =
    r#"var eventManager = new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3", tooOld);"#;
const SAMPLE_ID: &str = "b69a294c-a074-4f4e-b949-4ae7de90c3e3";

#[test]
fn test_extract_id_from_js_snippet() {
    let id = extract_event_id(JS_SNIPPET).unwrap();
    assert_eq!(id.to_string(), SAMPLE_ID);
}

#[test]
fn test_extract_path_from_js_snippet() {
    let path = extract_event_path(JS_SNIPPET).unwrap();
    assert_eq!(path, format!("events/{}", SAMPLE_ID));
}

#[test]
fn test_empty_input() {
    assert!(extract_event_id("").is_none());
    assert!(extract_event_path("").is_none());
    assert!(extract_event_ids("").is_empty());
}

#[test]
fn test_unrelated_text() {
    let text = "var x = 42; console.log('no events here');";
    assert!(extract_event_id(text).is_none());
    assert!(extract_event_path(text).is_none());
}

#[test]
fn test_bare_uuid_without_prefix_is_ignored() {
    assert!(extract_event_id(SAMPLE_ID).is_none());
}

#[test]
fn test_first_match_wins() {
    let text = "events/aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa ... events/bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";

    assert_eq!(
        extract_event_id(text).unwrap().to_string(),
        "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"
    );
    assert_eq!(
        extract_event_path(text).unwrap(),
        "events/aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"
    );
}

#[test]
fn test_extract_all_ids_in_order() {
    let text = "events/aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa ... events/bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";
    let ids: Vec<String> = extract_event_ids(text).iter().map(|id| id.to_string()).collect();

    assert_eq!(
        ids,
        vec![
            "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa",
            "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb"
        ]
    );
}

#[test]
fn test_uppercase_hex_does_not_match() {
    let text = "events/AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA";
    assert!(extract_event_id(text).is_none());
    assert!(extract_event_path(text).is_none());
}

#[test]
fn test_mixed_case_does_not_match() {
    let text = "events/b69a294c-A074-4f4e-b949-4ae7de90c3e3";
    assert!(extract_event_id(text).is_none());
}

#[test]
fn test_wrong_segment_lengths_do_not_match() {
    let cases = [
        "events/b69a294-a074-4f4e-b949-4ae7de90c3e3",
        "events/b69a294c-a07-4f4e-b949-4ae7de90c3e3",
        "events/b69a294c-a074-4f4-b949-4ae7de90c3e3",
        "events/b69a294c-a074-4f4e-b94-4ae7de90c3e3",
        "events/b69a294c-a074-4f4e-b949-4ae7de90c3e",
        "events/b69a294ca-074-4f4e-b949-4ae7de90c3e3",
        "events/--------------------------------",
    ];

    for text in cases {
        assert!(extract_event_id(text).is_none(), "matched {}", text);
        assert!(extract_event_path(text).is_none(), "matched {}", text);
    }
}

#[test]
fn test_malformed_reference_before_valid_one() {
    let text = "events/b69a294-a074-4f4e-b949-4ae7de90c3e3 events/bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";
    assert_eq!(
        extract_event_id(text).unwrap().to_string(),
        "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb"
    );
}

#[test]
fn test_reference_inside_url() {
    let text = "fetch('http://192.168.1.185:8080/events/b69a294c-a074-4f4e-b949-4ae7de90c3e3/Rounds.json')";
    assert_eq!(extract_event_id(text).unwrap().to_string(), SAMPLE_ID);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let first = extract_event_id(JS_SNIPPET);
    for _ in 0..10 {
        assert_eq!(extract_event_id(JS_SNIPPET), first);
    }
}

#[test]
fn test_concurrent_extraction() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| extract_event_id(JS_SNIPPET)))
        .collect();

    for handle in handles {
        let id = handle.join().unwrap().unwrap();
        assert_eq!(id.to_string(), SAMPLE_ID);
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rhevent_domain::EventId;

    fn canonical_id() -> impl Strategy<Value = String> {
        any::<u128>().prop_map(|v| EventId::from_value(v).to_string())
    }

    // Printable text that cannot itself contain "events/"
    fn filler() -> impl Strategy<Value = String> {
        "[ -~]{0,40}".prop_filter("no embedded reference", |s| !s.contains("events/"))
    }

    proptest! {
        /// Property: a well-formed reference yields exactly its identifier
        #[test]
        fn test_embedded_reference_is_found(
            prefix in filler(),
            id in canonical_id(),
            suffix in filler(),
        ) {
            let text = format!("{}events/{}{}", prefix, id, suffix);

            let extracted = extract_event_id(&text).map(|e| e.to_string());
            prop_assert_eq!(extracted.as_deref(), Some(id.as_str()));

            let path = format!("events/{}", id);
            prop_assert_eq!(extract_event_path(&text), Some(path.as_str()));
        }

        /// Property: text without the prefix never matches
        #[test]
        fn test_text_without_reference_is_absent(text in filler()) {
            prop_assert!(extract_event_id(&text).is_none());
            prop_assert!(extract_event_path(&text).is_none());
        }

        /// Property: uppercasing the identifier removes the match
        #[test]
        fn test_uppercase_identifier_is_absent(value in any::<u128>()) {
            let id = EventId::from_value(value).to_string().to_uppercase();
            // an all-digit identifier has no letters to uppercase
            prop_assume!(id.chars().any(|c| c.is_ascii_alphabetic()));

            let text = format!("events/{}", id);
            prop_assert!(extract_event_id(&text).is_none());
        }
    }
}
