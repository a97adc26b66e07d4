//! # Base types for raychess
//!
//! This is an auxiliary crate for `raychess`, which contains the value types and the geometric
//! tables. It was split from the main crate so these types can be shared by renderers that don't
//! need the board itself.
//!
//! Normally you don't want to use this crate directly. Use `raychess` instead.

pub mod geometry;
pub mod types;
