//! Verb (flag) lookup over split arguments.

mod coerce;
mod lookup;

pub use coerce::CoerceError;
pub use lookup::{Verb, VerbLookup, VerbOptions};
