//! # nexus-core
//!
//! Domain logic for the Vertex Nexus template storefront: the template
//! catalog, the preview content pipeline, and the gallery state machines.
//!
//! Everything in this crate is browser-free and runs on the native target,
//! so the interesting behavior (fetch batching, markup patching, readiness
//! gating, selection/favorites state) is unit-testable without a WASM
//! harness. The `nexus-web` crate wires these pieces to Leptos signals and
//! real network/DOM effects.
//!
//! ## Modules
//!
//! - [`catalog`] - Template records, the blank "create your own" canvas,
//!   and the built-in catalog data
//! - [`preview`] - Fetching and patching template files into sandboxable
//!   markup
//! - [`readiness`] - The loading-overlay gate (debounce + fallback timeout
//!   state machine)
//! - [`gallery`] - Selection index, favorites, and full-screen state
//! - [`pricing`] - INR price formatting (en-IN digit grouping)
//! - [`purchase`] - WhatsApp purchase message and deep-link construction
//! - [`typewriter`] - Stepwise text reveal driving the hero headline

#![warn(missing_docs)]

pub mod catalog;
pub mod gallery;
pub mod preview;
pub mod pricing;
pub mod purchase;
pub mod readiness;
pub mod typewriter;
