// 🌳 Five Elements - Generation/domination graph, parity, ten-god labels
// The relation graph is a complete 5-node directed cycle:
//   generation: Wood→Fire→Earth→Metal→Water→Wood
//   domination: Wood→Earth→Water→Fire→Metal→Wood
// Both directions are written out as literal lookup tables rather than
// derived from cycle arithmetic, so each relation can be read at a glance.

use serde::{Deserialize, Serialize};

// ============================================================================
// ELEMENT
// ============================================================================

/// One of the five elements (오행).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Korean name used as the lookup key in profile data ("나무", "불", ...).
    pub fn korean(&self) -> &'static str {
        match self {
            Element::Wood => "나무",
            Element::Fire => "불",
            Element::Earth => "흙",
            Element::Metal => "금",
            Element::Water => "물",
        }
    }

    /// Display name with hanja, e.g. "목(木)".
    pub fn display_name(&self) -> &'static str {
        match self {
            Element::Wood => "목(木)",
            Element::Fire => "화(火)",
            Element::Earth => "토(土)",
            Element::Metal => "금(金)",
            Element::Water => "수(水)",
        }
    }

    /// The element this element generates (생).
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element that generates this element (inverse of generates).
    pub fn generated_by(&self) -> Element {
        match self {
            Element::Wood => Element::Water,
            Element::Fire => Element::Wood,
            Element::Earth => Element::Fire,
            Element::Metal => Element::Earth,
            Element::Water => Element::Metal,
        }
    }

    /// The element this element dominates (극).
    pub fn dominates(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// The element that dominates this element (inverse of dominates).
    pub fn dominated_by(&self) -> Element {
        match self {
            Element::Wood => Element::Metal,
            Element::Earth => Element::Wood,
            Element::Water => Element::Earth,
            Element::Fire => Element::Water,
            Element::Metal => Element::Fire,
        }
    }

    /// All five elements, generation order.
    pub fn all() -> [Element; 5] {
        [
            Element::Wood,
            Element::Fire,
            Element::Earth,
            Element::Metal,
            Element::Water,
        ]
    }
}

// ============================================================================
// PARITY
// ============================================================================

/// Yin-yang classification of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Yang,
    Yin,
}

// ============================================================================
// TEN GODS (십성)
// ============================================================================

/// Relational category between the day stem and another stem or branch.
///
/// Grouped by how the target's element relates to the day stem's element,
/// then split by parity match. `Unknown` exists only as a guard value; the
/// relation graph is complete, so it is never produced for valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenGod {
    /// 비견 - same element, same parity
    Friend,
    /// 겁재 - same element, different parity
    RobWealth,
    /// 식신 - day stem generates target, same parity
    EatingGod,
    /// 상관 - day stem generates target, different parity
    HurtingOfficer,
    /// 편재 - day stem dominates target, same parity
    IndirectWealth,
    /// 정재 - day stem dominates target, different parity
    DirectWealth,
    /// 편관 - target dominates day stem, same parity
    SevenKillings,
    /// 정관 - target dominates day stem, different parity
    DirectOfficer,
    /// 편인 - target generates day stem, same parity
    IndirectResource,
    /// 정인 - target generates day stem, different parity
    DirectResource,
    /// Guard value, unreachable for valid stems/branches
    Unknown,
}

impl TenGod {
    /// Korean label as shown on the chart.
    pub fn korean(&self) -> &'static str {
        match self {
            TenGod::Friend => "비견",
            TenGod::RobWealth => "겁재",
            TenGod::EatingGod => "식신",
            TenGod::HurtingOfficer => "상관",
            TenGod::IndirectWealth => "편재",
            TenGod::DirectWealth => "정재",
            TenGod::SevenKillings => "편관",
            TenGod::DirectOfficer => "정관",
            TenGod::IndirectResource => "편인",
            TenGod::DirectResource => "정인",
            TenGod::Unknown => "알 수 없음",
        }
    }

    /// Classify the relation between the day stem and a target, both given
    /// as (element, parity) pairs. Shared by stem and branch ten-god lookups.
    pub fn classify(day: (Element, Parity), target: (Element, Parity)) -> TenGod {
        let (day_element, day_parity) = day;
        let (target_element, target_parity) = target;
        let same_parity = day_parity == target_parity;

        if day_element == target_element {
            if same_parity {
                TenGod::Friend
            } else {
                TenGod::RobWealth
            }
        } else if day_element.generates() == target_element {
            if same_parity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            }
        } else if day_element.dominates() == target_element {
            if same_parity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            }
        } else if day_element.dominated_by() == target_element {
            if same_parity {
                TenGod::SevenKillings
            } else {
                TenGod::DirectOfficer
            }
        } else if day_element.generated_by() == target_element {
            if same_parity {
                TenGod::IndirectResource
            } else {
                TenGod::DirectResource
            }
        } else {
            TenGod::Unknown
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
