//! # Classic Patterns: Observer & Composite
//!
//! Runnable examples for two classic object-oriented design patterns,
//! reworked as idiomatic Rust:
//!
//! ## Observer Pattern (trait objects)
//! - [`observer::Subject`] holding a string-keyed state map and a list of
//!   attached observers
//! - [`observer::Observer`] trait contract requiring only `update`
//! - Immutable state snapshots: `set_state` merges into a fresh snapshot
//!   and observers receive a read-only view
//! - Provided observers: display, history logger, `tracing` forwarder,
//!   closure adapter
//!
//! ## Composite Pattern (tagged variants)
//! - [`composite::Component`] as a sum type over [`composite::Leaf`] and
//!   [`composite::Composite`], so child operations on a leaf are a
//!   compile-time error instead of a runtime no-op
//! - A single `perform_action` recursing through the tree in insertion order
//!
//! The two structures are independent and share no runtime.
//!
//! Run the walkthroughs with:
//! ```bash
//! cargo run --bin observer_demo
//! cargo run --bin composite_demo
//! ```

pub mod composite;
pub mod observer;
