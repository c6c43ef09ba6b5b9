//! Command dispatch.
//!
//! Turns a URL fragment into a sketch invocation: decode the fragment, read
//! the leading term as the command name, resolve it against the registry and
//! the module exports, announce the sketch in the page title, then hand the
//! full command string to the entry point.
//!
//! Resolution is strict and ordered. Nothing observable happens until both
//! lookups succeed: an unknown sketch or missing entry point leaves the page
//! title untouched and invokes nothing.

use tracing::{debug, info};

use crate::error::{Result, SketchbookError};
use crate::module::{ModuleExports, SketchModule};
use crate::page::Page;
use crate::registry::SketchRegistry;
use crate::tokenizer;

/// Strips the leading `#` (if any) and percent-decodes the fragment into the
/// command string.
pub fn decode_fragment(fragment: &str) -> Result<String> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let decoded = urlencoding::decode(raw).map_err(|e| {
        SketchbookError::invalid_command(format!("fragment does not decode to UTF-8: {e}"))
    })?;
    Ok(decoded.into_owned())
}

/// Resolves fragments to sketch invocations against a fixed registry, module
/// and page.
pub struct Dispatcher {
    registry: SketchRegistry,
    module: Box<dyn SketchModule>,
    page: Box<dyn Page>,
}

impl Dispatcher {
    pub fn new(
        registry: SketchRegistry,
        module: Box<dyn SketchModule>,
        page: Box<dyn Page>,
    ) -> Self {
        Self {
            registry,
            module,
            page,
        }
    }

    /// Initializes the module, then dispatches the command in the fragment.
    ///
    /// Module initialization failures surface before any command handling;
    /// a failed run never changes the page title.
    pub async fn run(&mut self, fragment: &str) -> Result<()> {
        let exports = self.module.init().await?;
        debug!("Module initialized with exports: {:?}", exports.names());
        self.dispatch(fragment, &exports)
    }

    fn dispatch(&mut self, fragment: &str, exports: &ModuleExports) -> Result<()> {
        let command = decode_fragment(fragment)?;
        debug!("Decoded fragment into command: {:?}", command);

        let term = tokenizer::first_term(&command).ok_or_else(|| {
            SketchbookError::invalid_command(format!("no term recognized in {command:?}"))
        })?;
        let name = term.command_name();

        let sketch = self
            .registry
            .get(name)
            .ok_or_else(|| SketchbookError::unknown_sketch(name))?;
        let entry_point = exports
            .get(name)
            .ok_or_else(|| SketchbookError::unknown_entry_point(name))?;

        info!("Loading sketch '{}' with title '{}'", name, sketch.title);
        self.page.set_title(&sketch.page_title());
        entry_point(&command);
        Ok(())
    }
}
