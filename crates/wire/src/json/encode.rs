//! JSON encoding for host values
//!
//! Implements encoding of Value to JSON strings:
//! - tables are classified by [`shape::classify_keys`](super::shape::classify_keys)
//!   into arrays or objects, or rejected
//! - tables on the active path are tracked by identity to reject cycles
//! - floats always carry a fraction or exponent so they decode as floats

use super::error::EncodeError;
use super::shape::{array_index, classify_keys, Shape};
use rustc_hash::FxHashSet;
use tablejson_core::{CodecLimits, HostString, Key, Table, TableId, Value};
use tracing::debug;

/// Encode a Value to JSON string with default limits
pub fn encode_json(value: &Value) -> Result<String, EncodeError> {
    encode_json_with(value, &CodecLimits::default())
}

/// Encode a Value to JSON string
///
/// Either the whole value encodes or nothing does; the first error found,
/// depth-first in table iteration order, is returned.
pub fn encode_json_with(value: &Value, limits: &CodecLimits) -> Result<String, EncodeError> {
    let mut encoder = Encoder::new(limits);
    encoder.encode_value(value)?;
    Ok(encoder.out)
}

/// Encode a string with proper JSON escaping
pub fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    write_escaped(&mut result, s);
    result
}

/// Per-call encoder state
struct Encoder<'a> {
    out: String,
    /// Tables currently being serialized, outermost first
    ancestors: FxHashSet<TableId>,
    limits: &'a CodecLimits,
}

impl<'a> Encoder<'a> {
    fn new(limits: &'a CodecLimits) -> Self {
        Encoder {
            out: String::new(),
            ancestors: FxHashSet::default(),
            limits,
        }
    }

    fn encode_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.out.push_str("null"),
            Value::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => self.out.push_str(&i.to_string()),
            Value::Float(f) => self.out.push_str(&encode_float(*f)?),
            Value::String(s) => write_escaped(&mut self.out, host_str(s)?),
            Value::Table(t) => self.encode_table(t)?,
        }
        Ok(())
    }

    fn encode_table(&mut self, table: &Table) -> Result<(), EncodeError> {
        let id = table.id();
        if self.ancestors.contains(&id) {
            debug!(%id, depth = self.ancestors.len(), "cyclic table reference");
            return Err(EncodeError::CyclicReference);
        }
        let limit = self.limits.effective_max_depth();
        if self.ancestors.len() >= limit {
            debug!(limit, "table nesting too deep");
            return Err(EncodeError::DepthExceeded { limit });
        }

        self.ancestors.insert(id);
        let result = self.encode_entries(table.entries());
        self.ancestors.remove(&id);
        result
    }

    fn encode_entries(&mut self, entries: Vec<(Key, Value)>) -> Result<(), EncodeError> {
        match classify_keys(entries.iter().map(|(k, _)| k)).into_result()? {
            Shape::Empty => {
                self.out.push_str("[]");
                Ok(())
            }
            Shape::Array(len) => self.encode_array(entries, len),
            _ => self.encode_object(entries),
        }
    }

    /// Encode an array-shaped table in index order
    fn encode_array(&mut self, entries: Vec<(Key, Value)>, len: usize) -> Result<(), EncodeError> {
        let mut slots: Vec<Value> = vec![Value::Nil; len];
        for (key, value) in entries {
            // classification guarantees every index is in 1..=len
            if let Some(index) = array_index(&key) {
                slots[index - 1] = value;
            }
        }

        self.out.push('[');
        for (i, value) in slots.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.encode_value(value)?;
        }
        self.out.push(']');
        Ok(())
    }

    /// Encode an object-shaped table with deterministic key ordering
    ///
    /// Members are rendered in iteration order, so the first failing value is
    /// the first one the table yields, then written sorted by key bytes.
    fn encode_object(&mut self, entries: Vec<(Key, Value)>) -> Result<(), EncodeError> {
        let mut members: Vec<(HostString, String)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let Key::String(key) = key else { continue };
            let mut member = encode_string(host_str(&key)?);
            member.push(':');
            let outer = std::mem::replace(&mut self.out, member);
            let result = self.encode_value(&value);
            let member = std::mem::replace(&mut self.out, outer);
            result?;
            members.push((key, member));
        }
        members.sort_by(|(a, _), (b, _)| a.cmp(b));

        self.out.push('{');
        for (i, (_, member)) in members.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push_str(member);
        }
        self.out.push('}');
        Ok(())
    }
}

/// Borrow a host string as UTF-8 or report where it breaks
fn host_str(s: &HostString) -> Result<&str, EncodeError> {
    s.to_str().map_err(|e| EncodeError::InvalidString {
        valid_up_to: e.valid_up_to(),
    })
}

/// Encode a float as its shortest round-trip literal
fn encode_float(f: f64) -> Result<String, EncodeError> {
    let number = serde_json::Number::from_f64(f).ok_or(EncodeError::NonFiniteFloat(f))?;
    Ok(format_normal_float(number.to_string()))
}

/// Ensure a float literal has a decimal point or exponent
fn format_normal_float(s: String) -> String {
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Append `s` as a quoted JSON string
fn write_escaped(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::from(s).to_string());
}
