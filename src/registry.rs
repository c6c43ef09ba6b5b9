//! The sketch registry: named sketch records and the built-in seed entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the sketch every registry starts out with.
pub const INITIAL_SKETCH_NAME: &str = "initial";

/// Creation timestamp of the built-in sketch, in milliseconds since the epoch.
const INITIAL_CREATED_AT_MS: i64 = 1_593_328_376_159;

/// A single sketch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sketch {
    /// Human-readable title, shown in the page title on dispatch.
    pub title: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
    /// The sketch source text.
    #[serde(default)]
    pub text: String,
}

impl Sketch {
    /// The page title announced when this sketch is dispatched.
    ///
    /// The trailing space is part of the format: the rest of the title line
    /// is appended by the page host.
    pub fn page_title(&self) -> String {
        format!("{}.rs @ ", self.title)
    }
}

/// Mapping from sketch name to sketch record.
///
/// Lookup is exact (no normalization); a miss surfaces as an unknown-sketch
/// error at dispatch time rather than falling back to a default entry.
#[derive(Debug, Clone, Default)]
pub struct SketchRegistry {
    sketches: HashMap<String, Sketch>,
}

impl SketchRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in `initial` sketch.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(
            INITIAL_SKETCH_NAME,
            Sketch {
                title: "Initial".to_string(),
                created_at: INITIAL_CREATED_AT_MS,
                text: String::new(),
            },
        );
        registry
    }

    /// Inserts a sketch, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, sketch: Sketch) {
        self.sketches.insert(name.into(), sketch);
    }

    /// Merges entries into the registry; entries win over existing names.
    pub fn merge(&mut self, entries: HashMap<String, Sketch>) {
        self.sketches.extend(entries);
    }

    /// Looks up a sketch by name.
    pub fn get(&self, name: &str) -> Option<&Sketch> {
        self.sketches.get(name)
    }

    /// Returns true if the registry has a sketch with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.sketches.contains_key(name)
    }

    /// All sketch names, sorted for stable listing output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sketches.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sketch)> {
        self.sketches.iter().map(|(name, sketch)| (name.as_str(), sketch))
    }

    pub fn len(&self) -> usize {
        self.sketches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketches.is_empty()
    }
}
