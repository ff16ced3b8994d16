use advsearch_model::{FieldDefinition, InMemoryVariantRegistry, VariantRegistry, VariantSchema};

fn photo() -> VariantSchema {
    VariantSchema::new("Photo", vec![FieldDefinition::input("caption", "Caption")])
}

fn video() -> VariantSchema {
    VariantSchema::new("Video", vec![FieldDefinition::numeric("length", "Length")])
}

#[test]
fn empty_registry_has_no_keys() {
    let r = InMemoryVariantRegistry::new();
    assert!(r.is_empty());
    assert!(r.type_keys().is_empty());
    assert!(r.get_by_key("Photo").is_none());
}

#[test]
fn keys_follow_registration_order() {
    let r: InMemoryVariantRegistry = [video(), photo()].into_iter().collect();
    assert_eq!(r.type_keys(), vec!["Video".to_string(), "Photo".to_string()]);
    assert_eq!(r.len(), 2);
}

#[test]
fn register_replaces_same_key_in_place() {
    let mut r: InMemoryVariantRegistry = [photo(), video()].into_iter().collect();
    r.register(VariantSchema::new("Photo", vec![FieldDefinition::date("taken", "")]));
    assert_eq!(r.type_keys(), vec!["Photo".to_string(), "Video".to_string()]);
    assert!(r.get_by_key("Photo").unwrap().field("taken").is_some());
    assert!(r.get_by_key("Photo").unwrap().field("caption").is_none());
}

#[test]
fn contains_uses_lookup() {
    let r: InMemoryVariantRegistry = [photo()].into_iter().collect();
    assert!(r.contains("Photo"));
    assert!(!r.contains("Video"));
}

#[test]
fn from_json_loads_variants() {
    let r = InMemoryVariantRegistry::from_json(
        r#"[
            {"key": "Photo", "fields": [{"name": "caption", "field_type": "input"}]},
            {"key": "Video", "fields": [{"name": "length", "field_type": "numeric"}]}
        ]"#,
    )
    .unwrap();
    assert_eq!(r.len(), 2);
    assert_eq!(r.get_by_key("Video").unwrap().fields[0].name, "length");
}

#[test]
fn from_json_rejects_garbage() {
    assert!(InMemoryVariantRegistry::from_json("{not json").is_err());
}
