//! Client test support utilities
//!
//! Shared setup for the client's integration test binaries. Game fakes live
//! next to the tests that drive them (`apps/client/tests/support`).

pub mod logging;
