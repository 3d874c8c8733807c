//! Declarative color schemes: a flat record of named colors from which
//! a full widget palette can be derived.

mod schema;
pub use schema::*;

mod deserializers;
