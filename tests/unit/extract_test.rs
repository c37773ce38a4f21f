use keyscan::{extract, extract_keys, extract_keys_from_str, extract_root, KeyPathSet};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_transaction_payload_paths() {
    let payload = json!({
        "id": "INV-001",
        "customer": {"id": 12, "name": "Acme", "address": {"city": "Perth", "lines": ["1 Main St"]}},
        "lines": [
            {"item": {"sku": "A-1"}, "qty": 2, "taxes": [{"code": "GST"}]},
            {"item": {"sku": "B-2"}, "discount": 5}
        ],
        "tags": ["urgent"],
        "attachments": []
    });

    assert_eq!(
        extract_keys(&payload),
        vec![
            "attachments",
            "customer",
            "customer.address",
            "customer.address.city",
            "customer.address.lines",
            "customer.id",
            "customer.name",
            "id",
            "lines",
            "lines[]",
            "lines[].item",
            "lines[].item.sku",
            "lines[].qty",
            "lines[].taxes",
            "lines[].taxes[]",
            "lines[].taxes[].code",
            "tags",
        ]
    );
}

#[test]
fn test_heterogeneous_array_reports_first_element_only() {
    let keys = extract_keys(&json!({"items": [{"x": 1}, {"y": 2}]}));
    assert!(keys.contains(&"items[].x".to_string()));
    assert!(!keys.iter().any(|k| k.ends_with(".y")));
}

#[test]
fn test_repeated_structure_deduplicates() {
    let value = json!({"a": {"b": 1}, "c": [{"d": [{"e": 1}]}]});
    let set = extract_root(&value);

    let expected: KeyPathSet = ["a", "a.b", "c", "c[]", "c[].d", "c[].d[]", "c[].d[].e"]
        .into_iter()
        .collect();
    assert_eq!(set, expected);
    assert_eq!(set.len(), 7);
}

#[test]
fn test_scalar_roots() {
    for text in ["1", "\"s\"", "true", "null"] {
        assert!(extract_keys_from_str(text).unwrap().is_empty());
    }
    assert!(extract(&json!(3.5), "prefix").is_empty());
}

#[test]
fn test_keys_from_str_rejects_invalid_json() {
    assert!(extract_keys_from_str("{\"a\": }").is_err());
    assert!(extract_keys_from_str("").is_err());
}

#[test]
fn test_keys_with_special_characters_are_kept_verbatim() {
    let keys = extract_keys(&json!({"a.b": {"c d": 1}, "": 2}));
    assert_eq!(keys, vec!["", "a.b", "a.b.c d"]);
}
