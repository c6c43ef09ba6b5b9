//! Sketchbook - runs sketches named by URL-fragment command strings.
//!
//! A command string travels in the fragment of a URL (`#initial%20-fast`).
//! The bootstrapper decodes it, reads the first term as the command name,
//! resolves that name against the sketch registry and the module exports,
//! announces the sketch in the page title and hands the whole command string
//! to the entry point.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod module;
pub mod page;
pub mod registry;
pub mod tokenizer;
