//! Integration tests for the sketchbook.

pub mod config_test;
pub mod dispatch_test;
