//! End-to-end integration tests for the Hearth workspace.
//!
//! All tests live under `tests/`; this library target is intentionally
//! empty.
