//! Convenient imports for tablejson.
//!
//! ```
//! use tablejson::prelude::*;
//!
//! let json = encode(&Value::Table(Table::from_array([1, 2, 3])))?;
//! assert_eq!(json, "[1,2,3]");
//! # Ok::<(), tablejson::Error>(())
//! ```

// Entry points
pub use crate::{decode, decode_with, encode, encode_with};

// Error handling
pub use crate::error::{Error, Result};

// Value model
pub use tablejson_core::{CodecLimits, HostString, Key, Native, Table, Value};

// Host boundary
pub use tablejson_host::{HostModule, JsonModule, ModuleRegistry};
