//! Plain value bindings: cell ↔ cell, and text ↔ value through a converter.

pub mod convert;
pub mod value;

pub use convert::{Converter, DoubleConverter, IntegerConverter};
pub use value::{bind_bidirectional, bind_converted, ValueBinding};
