//! Utility modules.

/// Log sanitization utilities for untrusted remote values.
pub mod log_sanitizer;
