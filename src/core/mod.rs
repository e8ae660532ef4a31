//! Core domain logic for bankocr
//!
//! This module contains the recognition pipeline with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Record, Glyph, Account, Status)
//! - `services/` - Segmentation, recognition, validation, scanning
//! - `ports/` - Trait definitions for record sources and account sinks

pub mod models;
pub mod ports;
pub mod services;
