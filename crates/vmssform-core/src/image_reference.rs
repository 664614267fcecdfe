//! Image reference model the radio pair selects between.
//!
//! A scale set is backed either by a custom image (a resource `id`) or an
//! official platform image (publisher/offer/sku/version). `apply` projects
//! user-entered values onto the scale set's current reference, expanding
//! `${VAR}` placeholders from a caller-supplied environment.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageReference {
    pub id: Option<String>,
    pub publisher: Option<String>,
    pub offer: Option<String>,
    pub sku: Option<String>,
    pub version: Option<String>,
}

impl ImageReference {
    /// True when this reference points at a custom image: `id` present and
    /// not blank. The check endpoint applies the same predicate server-side.
    pub fn is_custom_image(&self) -> bool {
        self.id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    /// Projects this reference onto `current`. Which half applies is decided
    /// by what `current` already is: a custom reference only takes a new id,
    /// an official one only takes the quad. Absent quad fields are written as
    /// empty strings; all written values are env-expanded.
    pub fn apply(&self, current: &mut ImageReference, env: &HashMap<String, String>) {
        if current.is_custom_image() {
            current.id = self.id.as_deref().map(|id| expand(id, env));
        } else {
            current.publisher = Some(expand(self.publisher.as_deref().unwrap_or(""), env));
            current.offer = Some(expand(self.offer.as_deref().unwrap_or(""), env));
            current.sku = Some(expand(self.sku.as_deref().unwrap_or(""), env));
            current.version = Some(expand(self.version.as_deref().unwrap_or(""), env));
        }
    }

    /// Returns a copy with every present field env-expanded.
    pub fn resolved(&self, env: &HashMap<String, String>) -> ImageReference {
        let resolve = |field: &Option<String>| field.as_deref().map(|v| expand(v, env));
        ImageReference {
            id: resolve(&self.id),
            publisher: resolve(&self.publisher),
            offer: resolve(&self.offer),
            sku: resolve(&self.sku),
            version: resolve(&self.version),
        }
    }
}

/// Replaces `${NAME}` placeholders with values from `env`. Unknown variables
/// and unterminated placeholders are left as-is.
fn expand(input: &str, env: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start + 2..].find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let close = start + 2 + end;
        let key = &rest[start + 2..close];
        match env.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..=close]),
        }
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}
