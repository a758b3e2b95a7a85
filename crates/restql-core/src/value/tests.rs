use crate::{
    fields::FieldMap,
    value::{Value, format_value, is_reference},
};
use serde_json::json;

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---- reference detection ------------------------------------------------

#[test]
fn reference_pattern_requires_whole_identifier_pair() {
    assert!(is_reference("hero.id"));
    assert!(is_reference("weapon_1.owner_id"));

    assert!(!is_reference("Link"));
    assert!(!is_reference("hero."));
    assert!(!is_reference(".id"));
    assert!(!is_reference("hero.id.name"));
    assert!(!is_reference("Basic user:pass"));
    assert!(!is_reference("see hero.id"));
}

#[test]
fn str_conversion_classifies_references() {
    assert_eq!(Value::from("hero.id"), Value::Reference("hero.id".to_string()));
    assert_eq!(Value::from("Link"), v_txt("Link"));
    assert_eq!(Value::text("hero.id"), v_txt("hero.id"));
}

// ---- formatter ----------------------------------------------------------

#[test]
fn text_is_quoted_and_references_are_verbatim() {
    assert_eq!(format_value(&Value::from("Link")), "\"Link\"");
    assert_eq!(format_value(&Value::from("hero.id")), "hero.id");
    assert_eq!(format_value(&Value::reference("hero.id")), "hero.id");

    // reference-shaped text renders unquoted even when built as text
    assert_eq!(format_value(&v_txt("hero.id")), "hero.id");
}

#[test]
fn embedded_quotes_are_not_escaped() {
    assert_eq!(format_value(&v_txt("say \"hi\"")), "\"say \"hi\"\"");
}

#[test]
fn numbers_and_flags_use_default_text_form() {
    assert_eq!(format_value(&Value::from(10)), "10");
    assert_eq!(format_value(&Value::from(-3_i64)), "-3");
    assert_eq!(format_value(&Value::from(1.5)), "1.5");
    assert_eq!(format_value(&Value::from(2.0)), "2");
    assert_eq!(format_value(&Value::Float(f64::INFINITY)), "Infinity");
    assert_eq!(format_value(&Value::Float(f64::NAN)), "NaN");
    assert_eq!(format_value(&Value::from(true)), "true");
}

#[test]
fn large_and_tiny_floats_use_exponent_form() {
    assert_eq!(format_value(&Value::from(1e21)), "1e+21");
    assert_eq!(format_value(&Value::from(-2.5e22)), "-2.5e+22");
    assert_eq!(format_value(&Value::from(1.2345e25)), "1.2345e+25");
    assert_eq!(format_value(&Value::from(1e-7)), "1e-7");
    assert_eq!(format_value(&Value::from(-1.5e-7)), "-1.5e-7");

    assert_eq!(format_value(&Value::from(1e20)), "100000000000000000000");
    assert_eq!(format_value(&Value::from(1e-6)), "0.000001");
    assert_eq!(format_value(&Value::from(0.000_123)), "0.000123");
}

#[test]
fn lists_use_generic_json_encoding() {
    assert_eq!(
        format_value(&Value::from(["sword", "shield"])),
        "[\"sword\",\"shield\"]"
    );
    assert_eq!(format_value(&Value::from(vec![1, 2, 3])), "[1,2,3]");
    assert_eq!(format_value(&Value::List(vec![])), "[]");
}

#[test]
fn list_elements_do_not_get_reference_unquoting() {
    let list = Value::from(["hero.id", "Link"]);

    assert_eq!(format_value(&list), "[\"hero.id\",\"Link\"]");
}

#[test]
fn lists_escape_through_the_json_encoder() {
    let list = Value::List(vec![v_txt("a\"b")]);

    assert_eq!(format_value(&list), "[\"a\\\"b\"]");
}

#[test]
fn maps_recurse_through_the_formatter() {
    let stats = Value::from_pairs([("health", Value::from(100))]);
    assert_eq!(format_value(&stats), "{health: 100}");

    let nested = Value::from_pairs([
        ("owner", Value::from("hero.id")),
        ("name", Value::from("Link")),
        ("inner", Value::from_pairs([("tags", Value::from(["a", "b"]))])),
    ]);
    assert_eq!(
        format_value(&nested),
        "{owner: hero.id, name: \"Link\", inner: {tags: [\"a\",\"b\"]}}"
    );
}

#[test]
fn maps_inside_lists_are_json_objects_in_insertion_order() {
    let list = Value::List(vec![Value::from_pairs([
        ("z", Value::from(1)),
        ("a", Value::from("x")),
    ])]);

    assert_eq!(format_value(&list), "[{\"z\":1,\"a\":\"x\"}]");
}

#[test]
fn display_matches_formatter() {
    let value = Value::from_pairs([("health", Value::from(100))]);

    assert_eq!(value.to_string(), format_value(&value));
}

// ---- json ---------------------------------------------------------------

#[test]
fn json_encoding_matches_plain_mapping() {
    let value = Value::Map(FieldMap::from_iter([
        ("name", Value::from("Link")),
        ("owner", Value::from("hero.id")),
        ("level", Value::from(3.0)),
        ("ratio", Value::from(0.5)),
        ("broken", Value::Float(f64::NAN)),
    ]));

    assert_eq!(
        value.to_json(),
        json!({
            "name": "Link",
            "owner": "hero.id",
            "level": 3,
            "ratio": 0.5,
            "broken": null
        })
    );
}
