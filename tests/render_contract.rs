//! Contract tests for the parse-with-fallback renderer
//!
//! These exercise the public API end to end: valid payloads mount a tree
//! reachable down to every leaf, invalid payloads fall back to verbatim
//! text, missing targets and empty payloads are no-ops, and repeated
//! renders are idempotent.

use jsonv::{render, Mounted, RenderOutcome, Surface};
use rstest::rstest;
use serde_json::json;

#[test]
fn flat_object_renders_with_both_leaves() {
    let mut surface = Surface::new();
    let outcome = render(r#"{"orderId": 42, "status": "delivered"}"#, Some(&mut surface));

    assert_eq!(
        outcome,
        RenderOutcome::Rendered(json!({"orderId": 42, "status": "delivered"}))
    );

    let Some(Mounted::Tree(model)) = surface.mounted() else {
        panic!("expected a mounted tree");
    };
    let labels: Vec<String> = model
        .flattened_tree()
        .into_iter()
        .map(|n| n.label)
        .collect();
    assert!(labels.contains(&"orderId: 42".to_string()));
    assert!(labels.contains(&"status: \"delivered\"".to_string()));
}

#[test]
fn array_renders_three_ordered_leaves() {
    let mut surface = Surface::new();
    let outcome = render("[1, 2, 3]", Some(&mut surface));

    assert_eq!(outcome, RenderOutcome::Rendered(json!([1, 2, 3])));
    assert_eq!(
        surface.visible_text().unwrap(),
        "[3]\n  [0]: 1\n  [1]: 2\n  [2]: 3"
    );
}

#[test]
fn null_is_valid_and_renders_a_single_node() {
    let mut surface = Surface::new();
    let outcome = render("null", Some(&mut surface));

    assert_eq!(outcome, RenderOutcome::Rendered(json!(null)));
    assert_eq!(surface.visible_text().as_deref(), Some("null"));
}

#[test]
fn nested_structure_is_reachable_to_every_leaf() {
    let mut surface = Surface::new();
    let outcome = render(r#"{"nested": {"a": [1, {"b": true}]}}"#, Some(&mut surface));

    assert_eq!(
        outcome,
        RenderOutcome::Rendered(json!({"nested": {"a": [1, {"b": true}]}}))
    );

    let text = surface.visible_text().unwrap();
    for leaf in ["nested: {1}", "a: [2]", "[0]: 1", "[1]: {1}", "b: true"] {
        assert!(text.contains(leaf), "missing {leaf:?} in {text:?}");
    }
}

#[rstest]
#[case("not valid json")]
#[case("{not json")]
#[case("{'single':'quotes'}")]
#[case("{\"trailing\": 1,}")]
#[case("// comment\n{}")]
#[case("[1, 2] extra")]
#[case("   ")]
fn invalid_payload_shows_raw_text_exactly(#[case] raw: &str) {
    let mut surface = Surface::new();
    let outcome = render(raw, Some(&mut surface));

    assert_eq!(outcome, RenderOutcome::FellBackToRaw(raw.to_string()));
    assert_eq!(surface.visible_text().as_deref(), Some(raw));
}

#[test]
fn missing_target_performs_no_work() {
    assert_eq!(render(r#"{"a": 1}"#, None), RenderOutcome::Skipped);
    assert_eq!(render("not json either", None), RenderOutcome::Skipped);
}

#[test]
fn empty_payload_is_skipped_not_rendered() {
    // Documented choice: the host skips absent-or-empty payloads, so an
    // empty string renders nothing rather than empty text
    let mut surface = Surface::new();
    assert_eq!(render("", Some(&mut surface)), RenderOutcome::Skipped);
    assert!(surface.is_empty());
}

#[rstest]
#[case(r#"{"nested": {"a": [1, {"b": true}]}}"#)]
#[case("not valid json")]
#[case("[1, 2, 3]")]
fn rendering_twice_equals_rendering_once(#[case] raw: &str) {
    let mut once = Surface::new();
    let mut twice = Surface::new();

    let first = render(raw, Some(&mut once));
    render(raw, Some(&mut twice));
    let second = render(raw, Some(&mut twice));

    assert_eq!(first, second);
    assert_eq!(once.visible_text(), twice.visible_text());
}

#[test]
fn rerender_fully_replaces_previous_content() {
    let mut surface = Surface::new();
    render(r#"{"a": 1}"#, Some(&mut surface));
    render("broken {", Some(&mut surface));

    // No residue of the earlier tree
    assert_eq!(surface.visible_text().as_deref(), Some("broken {"));
}
