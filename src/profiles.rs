// 📖 Element Profiles - Trait text as data
// The per-element trait/description records are content, not logic: they
// live in data/element_profiles.json and are loaded into a read-only
// registry keyed by element. The shipped table is embedded at compile time
// so the library works without any files on disk; a different table (e.g.
// a localization) can be loaded from a path instead.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::elements::Element;

/// Trait table shipped with the crate.
const BUILTIN_PROFILES: &str = include_str!("../data/element_profiles.json");

// ============================================================================
// PROFILE RECORD
// ============================================================================

/// Static description record for one element. Never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementProfile {
    /// Lookup key: the element's Korean name ("나무", "불", ...)
    pub element: String,

    /// Display name with hanja, e.g. "목(木)"
    pub name: String,

    /// Emoji symbol for UI
    pub emoji: String,

    /// Short trait keywords
    pub traits: Vec<String>,

    /// Long-form description
    pub description: String,

    /// Comma-joined strengths summary
    pub strengths: String,

    /// Comma-joined weaknesses summary
    pub weaknesses: String,
}

// ============================================================================
// PROFILE REGISTRY
// ============================================================================

/// Read-only lookup of element profiles, keyed by Korean element name.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, ElementProfile>,
}

impl ProfileRegistry {
    /// Registry backed by the embedded table. The shipped JSON is part of
    /// the crate, so a parse failure here is a build defect, not a runtime
    /// condition.
    pub fn builtin() -> Self {
        let profiles: Vec<ElementProfile> =
            serde_json::from_str(BUILTIN_PROFILES).expect("embedded profile table is valid JSON");
        ProfileRegistry::from_profiles(profiles)
    }

    /// Load a profile table from a JSON file (same shape as the embedded one).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read profile file: {:?}", path.as_ref()))?;

        let profiles: Vec<ElementProfile> =
            serde_json::from_str(&content).context("Failed to parse profile JSON")?;

        Ok(ProfileRegistry::from_profiles(profiles))
    }

    /// Build a registry from already-parsed records.
    pub fn from_profiles(profiles: Vec<ElementProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|p| (p.element.clone(), p))
            .collect();
        ProfileRegistry { profiles }
    }

    /// Profile for an element, if the loaded table has one.
    pub fn get(&self, element: Element) -> Option<&ElementProfile> {
        self.profiles.get(element.korean())
    }

    /// Profile by raw Korean element name.
    pub fn get_by_name(&self, element: &str) -> Option<&ElementProfile> {
        self.profiles.get(element)
    }

    /// Number of profiles loaded.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_elements() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(registry.len(), 5);
        for element in Element::all() {
            assert!(registry.get(element).is_some(), "missing {:?}", element);
        }
    }

    #[test]
    fn test_builtin_profile_content() {
        let registry = ProfileRegistry::builtin();
        let wood = registry.get(Element::Wood).unwrap();
        assert_eq!(wood.name, "목(木)");
        assert_eq!(wood.emoji, "🌳");
        assert_eq!(wood.traits.len(), 5);
        assert!(!wood.description.is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = ProfileRegistry::builtin();
        assert!(registry.get_by_name("금").is_some());
        assert!(registry.get_by_name("철").is_none());
    }

    #[test]
    fn test_from_profiles_keys_by_element() {
        let registry = ProfileRegistry::from_profiles(vec![ElementProfile {
            element: "불".to_string(),
            name: "화(火)".to_string(),
            emoji: "🔥".to_string(),
            traits: vec!["열정".to_string()],
            description: "테스트".to_string(),
            strengths: "추진력".to_string(),
            weaknesses: "성급함".to_string(),
        }]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(Element::Fire).is_some());
        assert!(registry.get(Element::Wood).is_none());
    }
}
