use std::collections::BTreeMap;

use advsearch_dsl::MappingNode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn leaf_types_render_type_tag() {
    assert_eq!(MappingNode::Keyword.to_json(), json!({"type": "keyword"}));
    assert_eq!(MappingNode::Float.to_json(), json!({"type": "float"}));
    assert_eq!(MappingNode::Boolean.to_json(), json!({"type": "boolean"}));
    assert_eq!(MappingNode::Date.to_json(), json!({"type": "date"}));
}

#[test]
fn plain_text_omits_fields() {
    let node = MappingNode::Text { fields: BTreeMap::new() };
    assert_eq!(node.to_json(), json!({"type": "text"}));
}

#[test]
fn text_with_keyword_subfield() {
    assert_eq!(
        MappingNode::text_with_keyword("raw").to_json(),
        json!({"type": "text", "fields": {"raw": {"type": "keyword"}}})
    );
}

#[test]
fn empty_nested_keeps_properties_key() {
    let node = MappingNode::nested(BTreeMap::new());
    assert!(node.is_nested());
    assert_eq!(node.to_json(), json!({"type": "nested", "properties": {}}));
}

#[test]
fn nested_and_object_expose_properties() {
    let props = BTreeMap::from([("a".to_string(), MappingNode::Keyword)]);
    assert_eq!(MappingNode::nested(props.clone()).properties(), Some(&props));
    assert_eq!(MappingNode::object(props.clone()).properties(), Some(&props));
    assert_eq!(MappingNode::Keyword.properties(), None);
}

#[test]
fn mapping_deserializes_from_engine_json() {
    let node: MappingNode = serde_json::from_value(json!({
        "type": "nested",
        "properties": {"caption": {"type": "text", "fields": {"raw": {"type": "keyword"}}}}
    }))
    .unwrap();
    assert_eq!(
        node,
        MappingNode::nested(BTreeMap::from([(
            "caption".to_string(),
            MappingNode::text_with_keyword("raw")
        )]))
    );
}
