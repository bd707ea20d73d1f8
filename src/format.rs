use serde_json::Value;

/// Renders a message body for display.
///
/// A body that parses as JSON is re-serialized with two-space indentation and
/// object keys in sorted order, at every nesting level. Anything else is
/// returned unchanged.
pub fn render_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        // `Value` objects are backed by a BTreeMap, so keys come out sorted.
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_keys_and_indents() {
        assert_eq!(render_body(r#"{"b":2,"a":1}"#), "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn sorts_nested_objects() {
        let rendered = render_body(r#"{"z":{"y":true,"x":null},"list":[{"b":1,"a":2}]}"#);

        assert_eq!(
            rendered,
            "{\n  \"list\": [\n    {\n      \"a\": 2,\n      \"b\": 1\n    }\n  ],\n  \"z\": {\n    \"x\": null,\n    \"y\": true\n  }\n}"
        );
    }

    #[test]
    fn large_integers_keep_every_digit() {
        assert_eq!(
            render_body(r#"{"id":123456789012345678901234567890}"#),
            "{\n  \"id\": 123456789012345678901234567890\n}"
        );
    }

    #[test]
    fn non_ascii_text_is_not_escaped() {
        assert_eq!(render_body(r#"{"name":"café"}"#), "{\n  \"name\": \"café\"\n}");
    }

    #[test]
    fn non_json_is_printed_verbatim() {
        assert_eq!(render_body("not json"), "not json");
        assert_eq!(render_body("{\"unterminated\": "), "{\"unterminated\": ");
        assert_eq!(render_body(""), "");
    }

    #[test]
    fn json_scalars_are_valid_bodies() {
        assert_eq!(render_body("42"), "42");
        assert_eq!(render_body(" \"quoted\" "), "\"quoted\"");
        assert_eq!(render_body("[]"), "[]");
    }
}
