use advsearch_dsl::{BoolClause, Query};
use advsearch_filter::{CollectionQueryFilter, FilterEntry, FilterError, Operator, OuterOperator};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── FilterEntry::parse ───────────────────────────────────────────

#[test]
fn parse_full_entry() {
    let entry = FilterEntry::parse(&json!({
        "fieldname": "caption",
        "operator": "like",
        "filterEntryData": "sun*",
        "outerOperator": "should",
        "ignoreInheritance": true
    }))
    .unwrap();

    assert_eq!(entry.fieldname, "caption");
    assert_eq!(entry.operator, Operator::Like);
    assert_eq!(entry.value, json!("sun*"));
    assert_eq!(entry.outer_operator, OuterOperator::Or);
    assert!(entry.ignore_inheritance);
    assert!(entry.raw_fragment.is_none());
}

#[test]
fn parse_applies_defaults() {
    let entry = FilterEntry::parse(&json!({"fieldname": "name", "value": "x"})).unwrap();
    assert_eq!(entry, FilterEntry::new("name", Operator::Equals, json!("x")));
}

#[test]
fn parse_operator_spellings() {
    for (wire, operator) in [
        ("=", Operator::Equals),
        ("!=", Operator::NotEquals),
        ("<", Operator::Lt),
        ("<=", Operator::Lte),
        (">", Operator::Gt),
        (">=", Operator::Gte),
        ("gte", Operator::Gte),
        ("exists", Operator::Exists),
        ("not_exists", Operator::NotExists),
    ] {
        let entry = FilterEntry::parse(&json!({"fieldname": "f", "operator": wire})).unwrap();
        assert_eq!(entry.operator, operator, "wire operator {wire}");
    }
}

#[test]
fn parse_outer_operator_aliases() {
    for (wire, outer) in [
        ("must", OuterOperator::And),
        ("and", OuterOperator::And),
        ("should", OuterOperator::Or),
        ("or", OuterOperator::Or),
        ("must_not", OuterOperator::Not),
        ("NOT", OuterOperator::Not),
    ] {
        let entry = FilterEntry::parse(&json!({"fieldname": "f", "outerOperator": wire})).unwrap();
        assert_eq!(entry.outer_operator, outer);
    }
}

#[test]
fn parse_raw_query_ignores_operator_and_value() {
    let entry = FilterEntry::parse(&json!({
        "operator": "exists",
        "filterEntryData": "ignored",
        "rawQuery": {"match_all": {}}
    }))
    .unwrap();
    assert_eq!(entry.raw_fragment, Some(Query::Raw(json!({"match_all": {}}))));
}

#[test]
fn parse_rejects_missing_fieldname() {
    let err = FilterEntry::parse(&json!({"operator": "="})).unwrap_err();
    assert!(matches!(err, FilterError::MalformedFilter(ref msg) if msg.contains("fieldname")));
}

#[test]
fn parse_rejects_unknown_operator() {
    let err = FilterEntry::parse(&json!({"fieldname": "f", "operator": "~~"})).unwrap_err();
    assert!(matches!(err, FilterError::MalformedFilter(_)));
}

#[test]
fn parse_rejects_non_object() {
    assert!(matches!(
        FilterEntry::parse(&json!(["caption"])),
        Err(FilterError::MalformedFilter(_))
    ));
}

// ── CollectionQueryFilter::parse ─────────────────────────────────

#[test]
fn parse_collection_filter() {
    let filter = CollectionQueryFilter::parse(&json!({
        "type": "Photo",
        "filterCondition": {"fieldname": "caption", "filterEntryData": "x"}
    }))
    .unwrap();
    assert_eq!(
        filter,
        CollectionQueryFilter::new(
            "Photo",
            FilterEntry::new("caption", Operator::Equals, json!("x"))
        )
    );
}

#[test]
fn parse_collection_filter_aliases() {
    let filter = CollectionQueryFilter::parse(&json!({
        "variantType": "Video",
        "condition": {"fieldname": "length", "operator": "exists"}
    }))
    .unwrap();
    assert_eq!(filter.variant_type, "Video");
    assert_eq!(filter.condition.operator, Operator::Exists);
}

#[test]
fn parse_collection_filter_requires_keys() {
    for payload in [
        json!({"filterCondition": {"fieldname": "caption"}}),
        json!({"type": "", "filterCondition": {"fieldname": "caption"}}),
        json!({"type": 7, "filterCondition": {"fieldname": "caption"}}),
        json!({"type": "Photo"}),
        json!({"type": "Photo", "filterCondition": "caption"}),
    ] {
        assert!(
            matches!(CollectionQueryFilter::parse(&payload), Err(FilterError::MalformedFilter(_))),
            "payload {payload}"
        );
    }
}

// ── Operators ────────────────────────────────────────────────────

#[test]
fn outer_operator_clauses() {
    assert_eq!(OuterOperator::And.clause(), BoolClause::Must);
    assert_eq!(OuterOperator::Or.clause(), BoolClause::Should);
    assert_eq!(OuterOperator::Not.clause(), BoolClause::MustNot);
}

#[test]
fn existence_operators() {
    assert!(Operator::Exists.is_existence());
    assert!(Operator::NotExists.is_existence());
    assert!(!Operator::Equals.is_existence());
    assert!(Operator::NotExists.is_negated_existence());
    assert!(!Operator::Exists.is_negated_existence());
    assert_eq!(Operator::NotExists.to_string(), "not_exists");
}
