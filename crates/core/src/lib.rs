//! Core value model for tablejson
//!
//! This crate defines the values exchanged between a host scripting runtime
//! and the JSON codec:
//!
//! - [`Value`]: the tagged union of host values (nil, boolean, integer, float,
//!   string, table)
//! - [`Table`]: the single composite type, acting as both array and map
//! - [`Key`]: the tagged union of everything a table may be indexed by
//! - [`Native`]: generic host-native values fed to the general-purpose converter
//! - [`CodecLimits`]: resource limits shared by encoder and decoder
//!
//! ## Examples
//!
//! ```
//! use tablejson_core::{Key, Table, Value};
//!
//! let list = Table::from_array(["a", "b", "c"]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(2), Some(Value::from("b")));
//!
//! let person = Table::new();
//! person.set("name", "Tim");
//! assert!(person.contains_key(Key::from("name")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod limits;
pub mod native;
pub mod table;
pub mod value;

pub use limits::{CodecLimits, DEFAULT_MAX_DEPTH, PARSER_MAX_DEPTH};
pub use native::Native;
pub use table::{Key, Table, TableId};
pub use value::{HostString, Value};
