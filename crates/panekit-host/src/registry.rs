#![forbid(unsafe_code)]

//! Room-type registry: mapping type tags to renderers.
//!
//! The registry is closed-world with one well-defined escape hatch: a type
//! with no entry resolves to the fallback renderer (the generic "loading"
//! placeholder panel), never to an error. Renderers are whatever the
//! embedding renders with; the registry is generic over them.

use ahash::AHashMap;

/// Registry from room `type` tags to renderers.
#[derive(Debug, Clone)]
pub struct RoomTypeRegistry<R> {
    entries: AHashMap<String, R>,
    fallback: R,
}

impl<R> RoomTypeRegistry<R> {
    /// Create a registry with the mandatory fallback renderer.
    #[must_use]
    pub fn new(fallback: R) -> Self {
        Self {
            entries: AHashMap::new(),
            fallback,
        }
    }

    /// Register a renderer for a type tag, returning any replaced entry.
    pub fn register(&mut self, room_type: impl Into<String>, renderer: R) -> Option<R> {
        self.entries.insert(room_type.into(), renderer)
    }

    /// Resolve a type tag, falling back for unregistered tags.
    #[must_use]
    pub fn renderer_for(&self, room_type: &str) -> &R {
        self.entries.get(room_type).unwrap_or(&self.fallback)
    }

    /// Whether a tag has its own (non-fallback) entry.
    #[must_use]
    pub fn is_registered(&self, room_type: &str) -> bool {
        self.entries.contains_key(room_type)
    }

    /// The fallback renderer.
    #[must_use]
    pub fn fallback(&self) -> &R {
        &self.fallback
    }
}
