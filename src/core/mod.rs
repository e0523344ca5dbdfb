//! Core types for cc-version-updater
//!
//! Holds the error taxonomy shared by every component (see [`error`] for how
//! each category degrades to a safe hook output) and the boxed-future alias
//! used by the object-safe collaborator traits.

pub mod error;

pub use error::{ErrorCategory, Result, UpdaterError};

use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed, `Send` future.
///
/// Collaborator traits ([`crate::probe::InstalledVersionProvider`],
/// [`crate::changelog::ReleaseSource`], ...) return this so they stay usable
/// as trait objects.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
