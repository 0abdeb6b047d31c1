//! Core type definitions used across the dox workspace.

pub mod id;

pub use id::*;
