//! Core components of the `finnews-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NewsClient`] and its builder.
//! - The immutable provider [`NewsConfig`].
//! - The primary [`NewsError`] type.
//! - Shared data models like [`Article`] and [`NewsQuery`].
//! - Internal networking and normalization helpers.

/// The main client (`NewsClient`), builder, and defaults.
pub mod client;
/// Provider endpoints and credentials.
pub mod config;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Shared data models used across the adapters and the aggregator.
pub mod models;
/// Source trait used by the aggregator to fan out.
pub mod services;

pub(crate) mod net;
pub(crate) mod normalize;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use config::{NewsConfig, NewsConfigBuilder, ProviderConfig};
pub use error::NewsError;
pub use models::{Article, NewsQuery, Sentiment, SortBy, Source, SourceOutcome};
pub use services::{NewsSource, SourceFuture};
