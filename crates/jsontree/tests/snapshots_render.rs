#![expect(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use insta::assert_snapshot;
use jsontree::{Tokenizer, lookup_key, parse, render};

mod common;

use crate::common::PERSON;

#[test]
fn snapshot_render_document() {
    let root = parse(PERSON.as_bytes()).expect("sample parses");
    assert_snapshot!(render(&root), @r#"
    active: "true"
    address: "city: "Lisbon"
    geo: "38.72 -9.14"
    zip: "1000-001""
    manager: "NULL"
    name: "Ana"
    score: "87.50"
    tags: "admin ops"
    "#);
}

#[test]
fn snapshot_render_lookups() {
    let root = parse(PERSON.as_bytes()).expect("sample parses");

    let mut out = String::new();
    for key in ["address", "tags", "score", "manager", "missing"] {
        match lookup_key(&root, key) {
            Ok(v) => writeln!(out, "{key} => {}", render(v)).unwrap(),
            Err(e) => writeln!(out, "{key} !! {e}").unwrap(),
        }
    }
    assert_snapshot!(out, @r#"
    address => city: "Lisbon"
    geo: "38.72 -9.14"
    zip: "1000-001"
    tags => admin ops
    score => 87.50
    manager => NULL
    missing !! key 'missing' not found
    "#);
}

#[test]
fn snapshot_compact_display() {
    let root = parse(PERSON.as_bytes()).expect("sample parses");
    assert_snapshot!(root.to_string(), @r#"{"active":true,"address":{"city":"Lisbon","geo":[38.72,-9.14],"zip":"1000-001"},"manager":null,"name":"Ana","score":87.5,"tags":["admin","ops"]}"#);
}

#[test]
fn snapshot_token_stream() {
    let mut out = String::new();
    for token in Tokenizer::new(br#"{"geo": [38.72, -9.14], "ok": true}"#) {
        writeln!(out, "{token}").unwrap();
    }
    assert_snapshot!(out, @r#"
    CURLY_LBRACE '{' at 0
    STRING 'geo' at 1
    COLON ':' at 6
    SQUARE_LBRACE '[' at 8
    NUMBER '38.72' at 9
    COMMA ',' at 14
    NUMBER '-9.14' at 16
    SQUARE_RBRACE ']' at 21
    COMMA ',' at 22
    STRING 'ok' at 24
    COLON ':' at 28
    BOOLEAN 'true' at 30
    CURLY_RBRACE '}' at 34
    "#);
}

#[test]
fn snapshot_errors() {
    let mut out = String::new();
    for src in [
        "",
        r#"{"a":}"#,
        "[1,2",
        "{\"a\": [1, 2,]}",
        "{\n  \"a\": 1\n  \"b\": 2\n}",
        "1-2.3",
        "[1] 2",
    ] {
        let err = parse(src.as_bytes()).expect_err("should fail");
        writeln!(out, "{err}").unwrap();
    }
    assert_snapshot!(out, @r#"
    syntax error: unexpected end of input, expected a value at 1:1
    syntax error: expected a value, got CURLY_RBRACE '}' at 1:6
    syntax error: unexpected end of input, expected ',' or ']' at 1:5
    syntax error: trailing comma before SQUARE_RBRACE at 1:13
    syntax error: expected ',' or '}', got STRING 'b' at 3:3
    syntax error: invalid number '1-2.3' at 1:1
    syntax error: trailing content NUMBER '2' after the root value at 1:5
    "#);
}
