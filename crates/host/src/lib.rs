//! Host call boundary for tablejson
//!
//! Scripts never call the codec directly. They `require("json")` and call
//! `json.encode(value)` / `json.decode(text)`. This crate owns everything
//! about that boundary:
//!
//! - [`Signature`]: the expected argument shapes of each entry point
//! - [`JsonModule`]: the `json` module, mapping codec failures to the
//!   two-valued `(nil, message)` result scripts expect
//! - [`ModuleRegistry`]: `preload` / `require` of host modules
//!
//! Argument errors are raised as [`CallError`]; codec errors are returned as
//! values.
//!
//! ## Examples
//!
//! ```
//! use tablejson_host::{HostModule, ModuleRegistry};
//! use tablejson_core::{Table, Value};
//!
//! let registry = ModuleRegistry::with_json();
//! let json = registry.require("json").unwrap();
//!
//! let out = json.call("encode", &[Value::Table(Table::from_array([1, 2, 3]))]).unwrap();
//! assert_eq!(out, vec![Value::from("[1,2,3]")]);
//!
//! let sparse = Table::from_array([1, 2]);
//! sparse.set(10, 3);
//! let out = json.call("encode", &[Value::Table(sparse)]).unwrap();
//! assert!(out[0].is_nil());
//! assert!(out[1].as_str().unwrap().contains("sparse array"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod module;
mod registry;
mod signature;

pub use error::CallError;
pub use module::{HostModule, JsonModule};
pub use registry::{ModuleLoader, ModuleRegistry};
pub use signature::{ArgShape, Signature, DECODE, ENCODE};
