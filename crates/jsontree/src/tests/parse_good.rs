use alloc::{format, string::String, vec, vec::Vec};

use rstest::rstest;

use crate::{Map, ParserOptions, Value, lookup_key, parse, parse_with_options, render};

fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect::<Map>())
}

#[test]
fn mixed_document_shape() {
    let root = parse(br#"{"a":1,"b":[true,false,null],"c":"x"}"#).unwrap();
    assert_eq!(root.len(), Some(3));

    let b = lookup_key(&root, "b").unwrap();
    assert_eq!(
        b,
        &Value::Array(vec![Value::Boolean(true), Value::Boolean(false), Value::Null])
    );
    assert_eq!(lookup_key(&root, "a"), Ok(&Value::Number(1.0)));
    assert_eq!(lookup_key(&root, "c"), Ok(&Value::String("x".into())));
}

#[rstest]
#[case(r#"{"a":1}"#, r#"{"a": 1}"#)]
#[case(r#"{"a":1}"#, "\n{\r\n\t\"a\"\t:\t1\n}\n")]
#[case("[1,2]", "[ 1 , 2 ]")]
#[case("[]", "[\n]")]
fn whitespace_is_insignificant(#[case] compact: &str, #[case] spaced: &str) {
    assert_eq!(parse(compact.as_bytes()), parse(spaced.as_bytes()));
    assert!(parse(compact.as_bytes()).is_ok());
}

#[test]
fn duplicate_keys_last_write_wins() {
    let root = parse(br#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(root.len(), Some(1));
    assert_eq!(lookup_key(&root, "a"), Ok(&Value::Number(2.0)));
}

#[test]
fn duplicate_keys_replace_composites() {
    let root = parse(br#"{"a":{"deep":[1,2,3]},"a":"flat"}"#).unwrap();
    assert_eq!(root, obj([("a", "flat".into())]));
}

#[rstest]
#[case("-3.14", -3.14)]
#[case("0", 0.0)]
#[case("-0", -0.0)]
#[case("10.5", 10.5)]
#[case("007", 7.0)]
#[case("1.", 1.0)]
#[case("123456789012", 123_456_789_012.0)]
#[allow(clippy::approx_constant)]
fn numbers(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(parse(src.as_bytes()), Ok(Value::Number(expected)));
}

#[test]
fn strings_keep_raw_text() {
    assert_eq!(
        parse(br#""line\nbreak \"quoted\"""#),
        Ok(Value::String(r#"line\nbreak \"quoted\""#.into()))
    );
    assert_eq!(parse("\"h\u{e9}llo\"".as_bytes()), Ok(Value::String("h\u{e9}llo".into())));
}

#[test]
fn nested_fifty_levels() {
    let depth = 50;
    let src = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let mut current = &parse(src.as_bytes()).unwrap();
    let mut levels = 1;
    while let Some(inner) = current.get_index(0) {
        current = inner;
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(current, &Value::Array(Vec::new()));
}

#[test]
fn nested_objects_and_arrays() {
    let root = parse(br#"{"arr": [1, {"nested": true}], "num": 42, "o": {}}"#).unwrap();
    assert_eq!(
        root,
        obj([
            (
                "arr",
                Value::Array(vec![Value::Number(1.0), obj([("nested", true.into())])])
            ),
            ("num", Value::Number(42.0)),
            ("o", obj([])),
        ])
    );
}

#[test]
fn trailing_content_allowed_by_option() {
    let options = ParserOptions {
        allow_trailing_content: true,
        ..Default::default()
    };
    assert_eq!(
        parse_with_options(br#"{"a":1} tail"#, options),
        Ok(obj([("a", Value::Number(1.0))]))
    );
}

#[test]
fn depth_limit_is_inclusive() {
    let options = ParserOptions {
        max_nesting_depth: Some(3),
        ..Default::default()
    };
    assert!(parse_with_options(br#"[{"a":[1]}]"#, options).is_ok());
}

#[test]
fn render_parsed_document() {
    let root = parse(br#"{"name": "Ana", "tags": ["x", "y"], "age": 31, "ok": null}"#).unwrap();
    let rendered: String = render(&root);
    assert_eq!(
        rendered,
        "age: \"31.00\"\nname: \"Ana\"\nok: \"NULL\"\ntags: \"x y\""
    );
}
