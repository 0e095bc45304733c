//! A sentinel-rooted doubly-linked list for heterogeneous values.
//!
//! This module provides the list engine: a circular doubly-linked structure
//! whose nodes live in an index-addressed arena and carry tagged
//! [`Datum`](crate::datum::Datum) payloads. Elements are located by position
//! or by byte-level value equality, and every mutating operation reports one
//! outcome from a closed error set.
//!
//! - [`List`]: the container and its insert/remove/query operations
//! - [`ListConfig`]: construction-time record width and capacity settings
//! - [`ListError`]: the closed failure taxonomy
//! - [`RenderRecord`]: caller-supplied rendering for opaque record payloads

mod arena;
mod core;
mod error;
mod render;

pub use self::core::{Direction, Iter, List, ListConfig};
pub use self::error::ListError;
pub use self::render::RenderRecord;
