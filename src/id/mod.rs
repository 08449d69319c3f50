//! Identifier generation for stored records.

mod generator;

pub use generator::IdGenerator;
