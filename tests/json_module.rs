//! json Module Contract Tests
//!
//! Drives the `json` module the way a script does: `require("json")`, then
//! `json.encode(...)` / `json.decode(...)`, checking both the single-value
//! success result and the `nil, message` failure result.

use tablejson::prelude::*;
use tablejson::CallError;

/// Script-side view of the module
fn json() -> std::sync::Arc<dyn HostModule> {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    ModuleRegistry::with_json().require("json").unwrap()
}

/// `json.encode(value)`, expecting success
fn encode_ok(value: impl Into<Value>) -> String {
    let out = json().call("encode", &[value.into()]).unwrap();
    assert_eq!(out.len(), 1, "expected a single result, got {:?}", out);
    out[0].as_str().unwrap().to_string()
}

/// `json.encode(value)`, expecting `nil, message`
fn encode_err(value: impl Into<Value>) -> String {
    let out = json().call("encode", &[value.into()]).unwrap();
    assert_eq!(out.len(), 2, "expected nil, message; got {:?}", out);
    assert!(out[0].is_nil());
    out[1].as_str().unwrap().to_string()
}

/// `json.decode(text)`, expecting success
fn decode_ok(text: &str) -> Value {
    let out = json().call("decode", &[Value::from(text)]).unwrap();
    assert_eq!(out.len(), 1, "expected a single result, got {:?}", out);
    out.into_iter().next().unwrap()
}

// ============================================================================
// Require
// ============================================================================

mod require {
    use super::*;

    #[test]
    fn test_require_exposes_encode_and_decode() {
        let module = json();
        assert_eq!(module.name(), "json");
        let exports = module.exports();
        assert!(exports.contains(&"encode"));
        assert!(exports.contains(&"decode"));
    }

    #[test]
    fn test_require_unregistered_module() {
        let registry = ModuleRegistry::new();
        assert!(matches!(
            registry.require("json"),
            Err(CallError::ModuleNotFound(_))
        ));
    }
}

// ============================================================================
// Encode values
// ============================================================================

mod encode_values {
    use super::*;

    #[test]
    fn test_true() {
        assert_eq!(encode_ok(true), "true");
    }

    #[test]
    fn test_false() {
        assert_eq!(encode_ok(false), "false");
    }

    #[test]
    fn test_integer() {
        assert_eq!(encode_ok(42), "42");
    }

    #[test]
    fn test_negative_int() {
        assert_eq!(encode_ok(-10), "-10");
    }

    #[test]
    fn test_float() {
        assert_eq!(encode_ok(1.234), "1.234");
    }

    #[test]
    fn test_nil() {
        assert_eq!(encode_ok(Value::Nil), "null");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(encode_ok(Table::new()), "[]");
    }

    #[test]
    fn test_number_list() {
        assert_eq!(encode_ok(Table::from_array([1, 2, 3])), "[1,2,3]");
    }

    #[test]
    fn test_string_list() {
        assert_eq!(
            encode_ok(Table::from_array(["a", "b", "c"])),
            r#"["a","b","c"]"#
        );
    }
}

// ============================================================================
// Encode errors
// ============================================================================

mod encode_errors {
    use super::*;

    #[test]
    fn test_sparse_array() {
        // {1, 2, [10] = 3}
        let t = Table::from_array([1, 2]);
        t.set(10, 3);
        assert!(encode_err(t).contains("sparse array"));
    }

    #[test]
    fn test_list_with_name_field() {
        // {1, 2, 3, name = "Tim"}
        let t = Table::from_array([1, 2, 3]);
        t.set("name", "Tim");
        assert!(encode_err(t).contains("mixed or invalid key types"));
    }

    #[test]
    fn test_boolean_key() {
        // {name = "Tim", [false] = 123}
        let t = Table::from_pairs([("name", "Tim")]);
        t.set(false, 123);
        assert!(encode_err(t).contains("mixed or invalid key types"));
    }

    #[test]
    fn test_non_finite_float() {
        assert!(encode_err(f64::INFINITY).contains("non-finite"));
    }
}

// ============================================================================
// Decode values
// ============================================================================

mod decode_values {
    use super::*;

    #[test]
    fn test_true() {
        assert_eq!(decode_ok("true"), Value::Boolean(true));
    }

    #[test]
    fn test_false() {
        assert_eq!(decode_ok("false"), Value::Boolean(false));
    }

    #[test]
    fn test_integer() {
        assert!(matches!(decode_ok("42"), Value::Integer(42)));
    }

    #[test]
    fn test_negative_int() {
        assert!(matches!(decode_ok("-10"), Value::Integer(-10)));
    }

    #[test]
    fn test_float() {
        assert!(matches!(decode_ok("1.234"), Value::Float(f) if f == 1.234));
    }

    #[test]
    fn test_null() {
        assert_eq!(decode_ok("null"), Value::Nil);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(decode_ok("[]"), Value::Table(Table::new()));
    }

    #[test]
    fn test_number_list() {
        assert_eq!(
            decode_ok("[1, 2, 3]"),
            Value::Table(Table::from_array([1, 2, 3]))
        );
    }

    #[test]
    fn test_string_list() {
        assert_eq!(
            decode_ok(r#"["a", "b", "c"]"#),
            Value::Table(Table::from_array(["a", "b", "c"]))
        );
    }

    #[test]
    fn test_malformed_json_is_nil_and_message() {
        let out = json().call("decode", &[Value::from("[1, 2")]).unwrap();
        assert!(out[0].is_nil());
        assert!(out[1].as_str().unwrap().contains("line 1"));
    }
}

// ============================================================================
// Argument counts
// ============================================================================

mod argument_counts {
    use super::*;

    fn raised(function: &str, args: &[Value]) -> String {
        json().call(function, args).unwrap_err().to_string()
    }

    #[test]
    fn test_decode_without_arguments() {
        assert!(raised("decode", &[]).contains("bad argument #1 to decode"));
    }

    #[test]
    fn test_decode_with_two_arguments() {
        let args = [Value::from(1), Value::from(2)];
        assert!(raised("decode", &args).contains("bad argument #1 to decode"));
    }

    #[test]
    fn test_encode_without_arguments() {
        assert!(raised("encode", &[]).contains("bad argument #1 to encode"));
    }

    #[test]
    fn test_encode_with_two_arguments() {
        let args = [Value::from(1), Value::from(2)];
        assert!(raised("encode", &args).contains("bad argument #1 to encode"));
    }

    #[test]
    fn test_decode_of_non_string() {
        let message = raised("decode", &[Value::Table(Table::new())]);
        assert!(message.contains("bad argument #1 to decode"));
        assert!(message.contains("string expected, got table"));
    }
}

// ============================================================================
// Complex cases
// ============================================================================

mod complex_cases {
    use super::*;

    #[test]
    fn test_mixed_list_round_trip() {
        let obj = Table::from_array(vec![
            Value::from("a"),
            Value::from(1),
            Value::from("b"),
            Value::from(2),
            Value::from("c"),
            Value::from(3),
        ]);
        let json_str = encode_ok(obj.clone());
        assert_eq!(decode_ok(&json_str), Value::Table(obj));
    }

    #[test]
    fn test_object_round_trip() {
        let obj = Table::from_pairs([
            ("name", Value::from("Tim")),
            ("number", Value::from(12345)),
        ]);
        let decoded = decode_ok(&encode_ok(obj.clone()));
        let table = decoded.as_table().unwrap();
        assert_eq!(table.get("name"), obj.get("name"));
        assert_eq!(table.get("number"), obj.get("number"));
    }

    #[test]
    fn test_nested_object_round_trip() {
        let obj = Table::from_pairs([("person", Table::from_pairs([("name", "tim")]))]);
        let decoded = decode_ok(&encode_ok(obj));
        let name = decoded
            .as_table()
            .and_then(|t| t.get("person"))
            .and_then(|p| p.as_table().and_then(|p| p.get("name")));
        assert_eq!(name, Some(Value::from("tim")));
    }

    #[test]
    fn test_recursion() {
        // obj = {abc = 123, def = nil}; obj2 = {obj = obj}; obj.obj2 = obj2
        let obj = Table::from_pairs([("abc", Value::from(123)), ("def", Value::Nil)]);
        let obj2 = Table::from_pairs([("obj", obj.clone())]);
        obj.set("obj2", obj2);

        let out = json().call("encode", &[Value::Table(obj.clone())]).unwrap();
        assert!(out[0].is_nil());
        assert!(out[1].as_str().unwrap().contains("recursively nested"));

        obj.set("obj2", Value::Nil);
    }
}

// ============================================================================
// Facade
// ============================================================================

mod facade {
    use super::*;

    #[test]
    fn test_number_token_fallback() {
        let token: serde_json::Number = "124.11".parse().unwrap();
        let value = tablejson::lift_native(Native::Number(token), &CodecLimits::default()).unwrap();
        assert_eq!(value, Value::from("124.11"));
    }

    #[test]
    fn test_depth_exceeded_both_ways() {
        let limits = CodecLimits::new().with_max_depth(2);
        let deep = Table::from_array([Table::from_array([Table::new()])]);
        assert!(encode_with(&Value::Table(deep), &limits)
            .unwrap_err()
            .is_depth_exceeded());
        assert!(decode_with("[[[]]]", &limits).unwrap_err().is_depth_exceeded());
    }

    #[test]
    fn test_cycle_error() {
        let t = Table::new();
        t.set(1, t.clone());
        assert!(encode(&Value::Table(t.clone())).unwrap_err().is_cycle());
        t.set(1, Value::Nil);
    }

    #[test]
    fn test_concurrent_encodes_share_nothing() {
        let shared = Table::from_pairs([("list", Table::from_array([1, 2, 3]))]);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let value = Value::Table(shared.clone());
                std::thread::spawn(move || encode(&value).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), r#"{"list":[1,2,3]}"#);
        }
    }
}
