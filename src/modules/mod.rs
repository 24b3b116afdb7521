//! Modules layer - Infrastructure components
//!
//! Contains the key-value storage backends and the collection store built on them.

pub mod storage;
