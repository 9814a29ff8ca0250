// Saju Engine - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod elements; // Five-element relation graph, parity, ten-god labels
pub mod engine;   // Four Pillars computation
pub mod profiles; // Read-only element trait text
pub mod tables;   // Stem/branch cycles and fixed calendar constants

// Re-export commonly used types
pub use elements::{Element, Parity, TenGod};
pub use engine::{FourPillars, Pillar, SajuEngine, SajuError};
pub use profiles::{ElementProfile, ProfileRegistry};
pub use tables::{
    branch_element, branch_parity, stem_element, stem_parity, EARTHLY_BRANCHES,
    EARTHLY_BRANCHES_HANJA, HEAVENLY_STEMS, HEAVENLY_STEMS_HANJA,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
