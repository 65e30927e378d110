//! Table shape classification
//!
//! Decides whether a table is a JSON array, a JSON object, or not encodable,
//! from its key set alone. All key-type policing lives here; the encoder only
//! dispatches on the result.

use super::error::EncodeError;
use tablejson_core::{Key, Table};

/// Classification outcome for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No entries; encodes as `[]`
    Empty,
    /// Keys are exactly `1..=len`
    Array(usize),
    /// Every key is a string
    Object,
    /// Every key is numeric but the set is not `1..N`
    Sparse,
    /// Unsupported key types, or string and numeric keys together
    Mixed,
}

impl Shape {
    /// Map the failing shapes to their encode error
    pub fn into_result(self) -> Result<Shape, EncodeError> {
        match self {
            Shape::Sparse => Err(EncodeError::SparseArray),
            Shape::Mixed => Err(EncodeError::InvalidKeyType),
            shape => Ok(shape),
        }
    }
}

/// Classify a table by its keys
pub fn classify(table: &Table) -> Shape {
    let entries = table.entries();
    classify_keys(entries.iter().map(|(k, _)| k))
}

/// Classify a key set
///
/// Keys are assumed unique under [`Key`] equality, which is what a table
/// guarantees.
pub fn classify_keys<'a, I>(keys: I) -> Shape
where
    I: IntoIterator<Item = &'a Key>,
{
    let keys: Vec<&Key> = keys.into_iter().collect();
    let len = keys.len();
    if len == 0 {
        return Shape::Empty;
    }

    let mut strings = 0usize;
    let mut numbers = 0usize;
    for key in &keys {
        match key {
            Key::String(_) => strings += 1,
            Key::Integer(_) | Key::Float(_) => numbers += 1,
            Key::Boolean(_) | Key::Table(_) => return Shape::Mixed,
        }
    }

    if strings == len {
        return Shape::Object;
    }
    if numbers != len {
        return Shape::Mixed;
    }

    // Every index must land in 1..=len exactly once
    let mut seen = vec![false; len];
    for key in keys {
        let slot = match array_index(key) {
            Some(i) if i >= 1 && i <= len => i - 1,
            _ => return Shape::Sparse,
        };
        if seen[slot] {
            return Shape::Sparse;
        }
        seen[slot] = true;
    }

    Shape::Array(len)
}

/// Position a numeric key would take in an array, if integral and positive
pub(crate) fn array_index(key: &Key) -> Option<usize> {
    match key {
        Key::Integer(i) => usize::try_from(*i).ok(),
        Key::Float(f) if f.fract() == 0.0 && *f >= 1.0 && *f <= usize::MAX as f64 => {
            Some(*f as usize)
        }
        _ => None,
    }
}
