//! Sketch module abstraction.
//!
//! A sketch module is the unit of executable code behind the registry: it is
//! initialized once per run and hands back a table of named entry points. The
//! dispatcher resolves the command name against that table and invokes the
//! matching entry point with the full command string.
//!
//! Exports are registered explicitly at construction time, so the set of
//! callable names is fixed before any command is dispatched.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Result, SketchbookError};
use crate::tokenizer;

/// An invocable entry point. Receives the entire decoded command string,
/// including the leading command name; argument parsing is the entry point's
/// own business.
pub type EntryPoint = Arc<dyn Fn(&str) + Send + Sync>;

/// The export table of an initialized module: entry points by name.
#[derive(Clone, Default)]
pub struct ModuleExports {
    entry_points: HashMap<String, EntryPoint>,
}

impl ModuleExports {
    /// Creates an empty export table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry point under the given name, replacing any existing
    /// export with that name.
    pub fn register(
        mut self,
        name: impl Into<String>,
        entry_point: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        self.entry_points.insert(name.into(), Arc::new(entry_point));
        self
    }

    /// Looks up an entry point by name.
    pub fn get(&self, name: &str) -> Option<&EntryPoint> {
        self.entry_points.get(name)
    }

    /// Returns true if an entry point with the given name is exported.
    pub fn contains(&self, name: &str) -> bool {
        self.entry_points.contains_key(name)
    }

    /// All exported names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entry_points.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entry_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_points.is_empty()
    }
}

impl fmt::Debug for ModuleExports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleExports")
            .field("entry_points", &self.names())
            .finish()
    }
}

/// A sketch module that can be initialized into an export table.
#[async_trait]
pub trait SketchModule: Send + Sync {
    /// Performs one-time module initialization and returns the exports.
    ///
    /// Dispatch must not proceed if this fails; there is no partially
    /// initialized state to fall back on.
    async fn init(&self) -> Result<ModuleExports>;
}

/// A module whose exports are known up front. This is the production module
/// for entry points compiled into the binary, and the plain test double.
pub struct StaticModule {
    exports: ModuleExports,
}

impl StaticModule {
    pub fn new(exports: ModuleExports) -> Self {
        Self { exports }
    }
}

#[async_trait]
impl SketchModule for StaticModule {
    async fn init(&self) -> Result<ModuleExports> {
        Ok(self.exports.clone())
    }
}

/// A module whose initialization always fails. Used in tests to exercise the
/// error path before any dispatch work happens.
pub struct FailingModule {
    message: String,
}

impl FailingModule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SketchModule for FailingModule {
    async fn init(&self) -> Result<ModuleExports> {
        Err(SketchbookError::module_init(self.message.clone()))
    }
}

/// The built-in module: the entry points compiled into this binary.
///
/// Exports only `initial`, which logs the command it was invoked with and
/// each term the tokenizer finds in it.
pub fn builtin_module() -> StaticModule {
    StaticModule::new(ModuleExports::new().register("initial", |command: &str| {
        info!("Starting sketch with command: {}", command);
        for term in tokenizer::terms(command) {
            debug!("Parsed term: {:?}", term);
        }
    }))
}
