//! Block registry interface
//!
//! Configured vent IDs are opaque strings until they are resolved against
//! the host's block registry. Resolution failure is never an error: the
//! state machine treats an unresolved ID as "condition not met" and the
//! recipe projection omits the pair.

use std::collections::HashMap;

/// Handle to a resolved block: its registry ID plus a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRef {
    pub id: String,
    pub name: String,
}

impl BlockRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Resolves registry IDs to block handles.
pub trait BlockRegistry {
    fn resolve(&self, id: &str) -> Option<BlockRef>;

    fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }
}

/// In-memory registry for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    blocks: HashMap<String, String>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.blocks.insert(id.into(), name.into());
    }

    /// Register an ID with a display name derived from its path segment,
    /// e.g. `"mod:dormant_scoria_vent"` → `"Dormant Scoria Vent"`.
    pub fn insert_auto(&mut self, id: &str) {
        let path = id.rsplit(':').next().unwrap_or(id);
        let name = path
            .split('_')
            .filter(|s| !s.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.blocks.insert(id.to_string(), name);
    }
}

impl BlockRegistry for MemoryRegistry {
    fn resolve(&self, id: &str) -> Option<BlockRef> {
        self.blocks
            .get(id)
            .map(|name| BlockRef::new(id, name.clone()))
    }
}
