//! Game implementations.

pub mod square;
