//! Parsed record tree consumed by the model layer.
//!
//! # Responsibility
//! - Provide tagged nodes, their structural kinds and pointer lookup.
//! - Keep GEDCOM tag comparison in one place.
//!
//! # Invariants
//! - Trees are owned, acyclic and finite.
//! - Node kinds are decided at construction.

pub mod index;
pub mod node;
pub mod tree;
