//! Guest invite collection.

pub mod invite_set;
