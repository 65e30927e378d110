//! Host tables and table keys
//!
//! A [`Table`] is the single composite type of the host runtime: the same
//! container serves as an array (keys `1..N`) and as a map (string keys).
//! Nothing stops a script from mixing the two or from using booleans, floats,
//! or other tables as keys; the encoder is responsible for policing that.
//!
//! Tables are shared handles. Cloning a `Table` clones the handle, not the
//! contents, so a table can contain itself, directly or through other tables.

use crate::value::{HostString, Value};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Table key
///
/// ## Equality Rules
///
/// - `Float` keys compare by bit pattern, so every float (NaN included) is a
///   usable key
/// - `Table` keys compare by identity, not content
/// - `Integer(1)` and `Float(1.0)` are distinct keys; construct float keys
///   through `Key::from(f64)` to get integral floats normalized to integers
#[derive(Debug, Clone)]
pub enum Key {
    /// Boolean key
    Boolean(bool),
    /// Integer key
    Integer(i64),
    /// Float key (non-integral after normalization)
    Float(f64),
    /// String key
    String(HostString),
    /// Table key, by identity
    Table(Table),
}

impl Key {
    /// Convert a value into a key; `Nil` cannot index a table
    pub fn from_value(value: Value) -> Option<Key> {
        match value {
            Value::Nil => None,
            Value::Boolean(b) => Some(Key::Boolean(b)),
            Value::Integer(i) => Some(Key::Integer(i)),
            Value::Float(f) => Some(Key::from(f)),
            Value::String(s) => Some(Key::String(s)),
            Value::Table(t) => Some(Key::Table(t)),
        }
    }

    /// Convert the key back into a value
    pub fn to_value(&self) -> Value {
        match self {
            Key::Boolean(b) => Value::Boolean(*b),
            Key::Integer(i) => Value::Integer(*i),
            Key::Float(f) => Value::Float(*f),
            Key::String(s) => Value::String(s.clone()),
            Key::Table(t) => Value::Table(t.clone()),
        }
    }

    /// Returns the host type name (for diagnostics)
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Boolean(_) => "boolean",
            Key::Integer(_) | Key::Float(_) => "number",
            Key::String(_) => "string",
            Key::Table(_) => "table",
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Boolean(a), Key::Boolean(b)) => a == b,
            (Key::Integer(a), Key::Integer(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::String(a), Key::String(b)) => a == b,
            (Key::Table(a), Key::Table(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Key::Boolean(b) => b.hash(state),
            Key::Integer(i) => i.hash(state),
            Key::Float(f) => f.to_bits().hash(state),
            Key::String(s) => s.hash(state),
            Key::Table(t) => t.id().hash(state),
        }
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Boolean(b)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Integer(i64::from(i))
    }
}

impl From<f64> for Key {
    /// Integral floats inside the `i64` range become integer keys.
    fn from(f: f64) -> Self {
        // 2^63 is exactly representable; anything below it with no fraction fits i64
        const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
        if f.fract() == 0.0 && f >= -TWO_POW_63 && f < TWO_POW_63 {
            Key::Integer(f as i64)
        } else {
            Key::Float(f)
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(HostString::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(HostString::from(s))
    }
}

impl From<HostString> for Key {
    fn from(s: HostString) -> Self {
        Key::String(s)
    }
}

impl From<Table> for Key {
    fn from(t: Table) -> Self {
        Key::Table(t)
    }
}

/// Identity of a table's storage
///
/// Two handles have the same id iff they point at the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table: {:#x}", self.0)
    }
}

/// Shared host table
///
/// Entries keep insertion order. Assigning `Nil` removes a key, as in the
/// host runtime.
#[derive(Clone, Default)]
pub struct Table {
    inner: Arc<RwLock<IndexMap<Key, Value>>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an array-style table with keys `1..N`
    ///
    /// `Nil` elements leave holes, exactly like a host constructor
    /// `{1, nil, 3}` does.
    pub fn from_array<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let table = Table::new();
        {
            let mut map = table.inner.write();
            for (index, value) in (1i64..).zip(values) {
                let value = value.into();
                if !value.is_nil() {
                    map.insert(Key::Integer(index), value);
                }
            }
        }
        table
    }

    /// Build a table from key/value pairs, later pairs overwriting earlier ones
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let table = Table::new();
        for (key, value) in pairs {
            table.set(key, value);
        }
        table
    }

    /// Identity of this table's storage
    pub fn id(&self) -> TableId {
        TableId(Arc::as_ptr(&self.inner) as *const () as usize)
    }

    /// Check whether two handles refer to the same table
    pub fn ptr_eq(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Assign `value` to `key`, returning the previous value
    ///
    /// Assigning `Nil` removes the entry.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let mut map = self.inner.write();
        if value.is_nil() {
            map.shift_remove(&key)
        } else {
            map.insert(key, value)
        }
    }

    /// Look up a key
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.inner.read().get(&key.into()).cloned()
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.inner.read().contains_key(&key.into())
    }

    /// Number of entries (all key types)
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of all entries in insertion order
    ///
    /// The snapshot holds handles, not copies, of nested tables. No lock is
    /// held once this returns.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Largest `n` such that keys `1..=n` are all present
    pub fn sequence_len(&self) -> usize {
        let map = self.inner.read();
        let mut n = 0usize;
        while map.contains_key(&Key::Integer(n as i64 + 1)) {
            n += 1;
        }
        n
    }

    /// Append at `sequence_len() + 1`
    pub fn push(&self, value: impl Into<Value>) {
        let next = self.sequence_len() as i64 + 1;
        self.set(next, value);
    }

    /// Compare contents, ignoring entry order
    ///
    /// Nested table values are compared by content as well. Comparing two
    /// distinct self-referencing tables does not terminate; identical handles
    /// short-circuit.
    pub fn content_eq(&self, other: &Table) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let left = self.inner.read().clone();
        let right = other.inner.read().clone();
        left.len() == right.len()
            && left
                .iter()
                .all(|(k, v)| right.get(k).map_or(false, |w| v == w))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents are not printed: a table may contain itself
        f.debug_struct("Table")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
