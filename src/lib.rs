//! Hostfile - list, query, add, and remove hosts file entries.

pub mod cli;
pub mod entry;
pub mod error;
pub mod parser;
pub mod store;
