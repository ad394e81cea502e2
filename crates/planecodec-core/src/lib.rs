//! Core types and utilities for the plane codecs
//!
//! This crate provides the data structures shared by every codec stage:
//! integer sample planes, the three-channel image set, the codec
//! configuration and the error type.

pub mod consts;
pub mod error;
pub mod plane;
pub mod types;

pub use error::{PlaneError, PlaneResult};
pub use plane::*;
pub use types::*;
