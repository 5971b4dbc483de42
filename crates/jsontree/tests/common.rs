#![allow(missing_docs)]
#![allow(dead_code)]

pub const PERSON: &str = r#"
{
    "name": "Ana",
    "address": {
        "city": "Lisbon",
        "zip": "1000-001",
        "geo": [38.72, -9.14]
    },
    "tags": ["admin", "ops"],
    "active": true,
    "manager": null,
    "score": 87.5
}
"#;

pub fn nested_arrays(depth: usize) -> String {
    format!("{}{}", "[".repeat(depth), "]".repeat(depth))
}
