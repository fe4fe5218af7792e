//! Core crate contains platform independent building blocks to present coordinates embedded into
//! a web page on a hosted map: either as numbered markers or as a driving route with its total
//! distance.
//!
//! Map drawing, routing and page access are abstracted by traits in [`provider`] module, so the
//! whole initialization flow can be run against any mapping provider.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod config;
pub mod initializer;
pub mod models;
pub mod provider;
pub mod utils;
