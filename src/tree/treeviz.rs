//! Static tree serialization for JSON values
//!
//! Renders a parsed value as a connector-drawn line tree, one node per
//! line. This is the non-interactive counterpart of the tree viewer,
//! used when stdout is not a terminal or `--plain` is requested.
//!
//! ## Example
//!
//! ```text
//! ⊞ {2}
//! ├─ # orderId: 42
//! └─ " status: "delivered"
//! ```

use super::model::{value_preview, ValueKind};
use serde_json::Value;

/// Entries of a container, labeled the way the tree model labels them
fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| (format!("{}: {}", key, value_preview(child)), child))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| (format!("[{}]: {}", index, value_preview(child)), child))
            .collect(),
        _ => Vec::new(),
    }
}

fn format_node(
    label: &str,
    value: &Value,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    output: &mut String,
) {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let icon = ValueKind::of(value).icon();

    output.push_str(&format!("{}{} {} {}\n", prefix, connector, icon, label));

    let children = entries(value);
    if !children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = children.len();
        for (index, (child_label, child)) in children.into_iter().enumerate() {
            format_node(&child_label, child, &child_prefix, index, child_count, output);
        }
    }
}

/// Serialize a JSON value as a line tree
pub fn to_treeviz_str(value: &Value) -> String {
    let icon = ValueKind::of(value).icon();
    let mut output = format!("{} {}\n", icon, value_preview(value));

    let children = entries(value);
    let child_count = children.len();
    for (index, (label, child)) in children.into_iter().enumerate() {
        format_node(&label, child, "", index, child_count, &mut output);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        let output = to_treeviz_str(&json!({"orderId": 42, "status": "delivered"}));
        insta::assert_snapshot!(output.trim_end(), @r#"
        ⊞ {2}
        ├─ # orderId: 42
        └─ " status: "delivered"
        "#);
    }

    #[test]
    fn test_nested_structure() {
        let output = to_treeviz_str(&json!({"nested": {"a": [1, {"b": true}]}}));
        insta::assert_snapshot!(output.trim_end(), @r#"
        ⊞ {1}
        └─ ⊞ nested: {1}
          └─ ☰ a: [2]
            ├─ # [0]: 1
            └─ ⊞ [1]: {1}
              └─ ◐ b: true
        "#);
    }

    #[test]
    fn test_array_root() {
        let output = to_treeviz_str(&json!([1, 2, 3]));
        assert_eq!(output, "☰ [3]\n├─ # [0]: 1\n├─ # [1]: 2\n└─ # [2]: 3\n");
    }

    #[test]
    fn test_scalar_root_is_single_line() {
        assert_eq!(to_treeviz_str(&json!(null)), "∅ null\n");
        assert_eq!(to_treeviz_str(&json!("plain")), "\" \"plain\"\n");
    }

    #[test]
    fn test_empty_containers_have_no_children() {
        assert_eq!(to_treeviz_str(&json!({})), "⊞ {0}\n");
        assert_eq!(to_treeviz_str(&json!([])), "☰ [0]\n");
    }

    #[test]
    fn test_sibling_connector_is_continued() {
        let output = to_treeviz_str(&json!({"a": {"x": 1}, "b": 2}));
        assert_eq!(
            output,
            "⊞ {2}\n├─ ⊞ a: {1}\n│ └─ # x: 1\n└─ # b: 2\n"
        );
    }
}
