//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` with key and
//! resize events and inspect the rendered buffer.

mod crash_regression;
