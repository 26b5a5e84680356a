//! Tag registry: immutable mapping from a 16-bit tag to its display name
//! and field codec.
//!
//! The registry is configuration data built once at startup; decoding never
//! mutates it, so one registry may be shared read-only across any number of
//! concurrent decodes.

use crate::error::ProtocolError;
use crate::field::FieldCodec;
use std::collections::HashMap;

/// Display name and wire codec for one tag.
#[derive(Debug, Clone)]
pub struct TagSpec {
    pub name: String,
    pub codec: FieldCodec,
}

impl TagSpec {
    pub fn new(name: impl Into<String>, codec: FieldCodec) -> Self {
        TagSpec {
            name: name.into(),
            codec,
        }
    }
}

/// Immutable tag registry. The namespace is closed: nested STLV payloads
/// resolve their tags through the same registry, and an absent tag fails
/// the decode with [`ProtocolError::UnknownTag`].
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    tags: HashMap<u16, TagSpec>,
}

impl DocumentRegistry {
    /// Build a registry from `(tag, spec)` entries, rejecting duplicates.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (u16, TagSpec)>,
    ) -> Result<Self, ProtocolError> {
        let mut tags = HashMap::new();
        for (tag, spec) in entries {
            if tags.insert(tag, spec).is_some() {
                return Err(ProtocolError::DuplicateTag(tag));
            }
        }
        Ok(DocumentRegistry { tags })
    }

    /// Build from a literal table known to be duplicate-free (the built-in
    /// table's entry count is pinned by a test).
    pub(crate) fn from_table(entries: impl IntoIterator<Item = (u16, TagSpec)>) -> Self {
        DocumentRegistry {
            tags: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, tag: u16) -> Option<&TagSpec> {
        self.tags.get(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
