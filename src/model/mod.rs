//! Core data structures for reaction network expansion.
//!
//! This module provides the foundational types that flow through
//! `lowt-pathways`:
//!
//! - [`label`] – Generation labels naming discovery stages ("fuel", "R", "ROO", ...).
//! - [`structure`] – The opaque molecular structure capability consumed by the engine.
//! - [`pool`] – The deduplicated, per-label accumulation of discovered species.
//! - [`candidate`] – Product lists returned by one rule application.
//!
//! The data model intentionally keeps structures opaque: identity, equality,
//! and formula lookup are supplied by an external structure registry through
//! the [`Structure`] trait, so the [`crate::expand`] pipeline never inspects
//! molecular connectivity itself.
//!
//! [`Structure`]: structure::Structure

pub mod candidate;
pub mod label;
pub mod pool;
pub mod structure;
