//! Canonical text rendering of value trees.

use crate::value::JsonValue;

/// Renders a value tree as JSON text. Total over any valid tree.
///
/// The output is canonical rather than byte-identical to whatever input the
/// tree came from: container brackets are space padded, entries separated by
/// comma-space, and object entries appear in map iteration order, which is
/// not insertion order.
pub(crate) fn to_string(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        // f64 Display prints the shortest decimal form that parses back to
        // the exact same bits, and never NaN/infinity for parser output.
        JsonValue::Number(n) => out.push_str(&n.to_string()),
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Array(items) => {
            if items.is_empty() {
                out.push_str("[ ]");
                return;
            }
            out.push_str("[ ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(&item.value, out);
            }
            out.push_str(" ]");
        }
        JsonValue::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{ }");
                return;
            }
            out.push_str("{ ");
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(key, out);
                out.push_str(": ");
                write_value(&item.value, out);
            }
            out.push_str(" }");
        }
    }
}

/// Re-escapes quote, backslash and the control range; everything else is
/// emitted as-is, already valid UTF-8.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::Json;

    fn render(json: &Json) -> String {
        json.serialize()
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(render(&Json::new()), "null");
        assert_eq!(render(&Json::from(true)), "true");
        assert_eq!(render(&Json::from(false)), "false");
        assert_eq!(render(&Json::from(0.0)), "0");
        assert_eq!(render(&Json::from(1.5)), "1.5");
        assert_eq!(render(&Json::from(-123.45)), "-123.45");
    }

    #[test]
    fn test_serialize_number_round_trips_exactly() {
        for &n in &[0.1, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE, -2.5e-10] {
            let text = render(&Json::from(n));
            assert_eq!(text.parse::<f64>().unwrap(), n);
        }
    }

    #[test]
    fn test_serialize_strings() {
        assert_eq!(render(&Json::from("hello")), "\"hello\"");
        assert_eq!(render(&Json::from("a\"b\\c")), "\"a\\\"b\\\\c\"");
        assert_eq!(
            render(&Json::from("\u{8}\u{c}\n\r\t")),
            "\"\\b\\f\\n\\r\\t\""
        );
        // other control bytes become numeric escapes
        assert_eq!(render(&Json::from("\u{1f}")), "\"\\u001F\"");
        // forward slash is not re-escaped
        assert_eq!(render(&Json::from("a/b")), "\"a/b\"");
        assert_eq!(render(&Json::from("héllo")), "\"héllo\"");
    }

    #[test]
    fn test_serialize_arrays() {
        assert_eq!(render(&Json::from(Vec::<Json>::new())), "[ ]");
        let arr = Json::from_array([1.0, 2.0, 3.0]);
        assert_eq!(render(&arr), "[ 1, 2, 3 ]");
        let nested = Json::from_array([Json::from_array([true])]);
        assert_eq!(render(&nested), "[ [ true ] ]");
    }

    #[test]
    fn test_serialize_objects() {
        assert_eq!(render(&Json::from_object(Vec::<(String, Json)>::new())), "{ }");
        let obj = Json::from_object([("a", 1.0)]);
        assert_eq!(render(&obj), "{ \"a\": 1 }");
    }
}
