//! HTTP middleware for request processing.
//!
//! Provides observability middleware applied to the whole router.

pub mod tracing;
