// 📅 Cyclic Tables - Stems, Branches and fixed calendar constants
// All tables here are process-wide immutable constants: the sexagenary
// cycle symbols, their hanja renderings, their element/parity mappings,
// and the two approximation tables (lunar month offsets, season starts).

use crate::elements::{Element, Parity};

// ============================================================================
// HEAVENLY STEMS (천간, 10 symbols)
// ============================================================================

/// The ten heavenly stems, cycle order. Index 0 = 갑.
pub const HEAVENLY_STEMS: [&str; 10] = [
    "갑", "을", "병", "정", "무", "기", "경", "신", "임", "계",
];

/// Hanja rendering per stem, same indexing as HEAVENLY_STEMS.
pub const HEAVENLY_STEMS_HANJA: [&str; 10] = [
    "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸",
];

/// Element of each stem: 갑을=Wood, 병정=Fire, 무기=Earth, 경신=Metal, 임계=Water.
pub fn stem_element(stem_index: usize) -> Element {
    match stem_index {
        0 | 1 => Element::Wood,
        2 | 3 => Element::Fire,
        4 | 5 => Element::Earth,
        6 | 7 => Element::Metal,
        8 | 9 => Element::Water,
        _ => panic!("stem index out of range: {}", stem_index),
    }
}

/// Parity of each stem: even indices (갑 병 무 경 임) are yang, odd are yin.
pub fn stem_parity(stem_index: usize) -> Parity {
    assert!(stem_index < 10, "stem index out of range: {}", stem_index);
    if stem_index % 2 == 0 {
        Parity::Yang
    } else {
        Parity::Yin
    }
}

// ============================================================================
// EARTHLY BRANCHES (지지, 12 symbols)
// ============================================================================

/// The twelve earthly branches, cycle order. Index 0 = 자 (Rat).
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

/// Hanja rendering per branch, same indexing as EARTHLY_BRANCHES.
pub const EARTHLY_BRANCHES_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Element of each branch.
pub fn branch_element(branch_index: usize) -> Element {
    match branch_index {
        0 | 11 => Element::Water,        // 자, 해
        1 | 4 | 7 | 10 => Element::Earth, // 축, 진, 미, 술
        2 | 3 => Element::Wood,          // 인, 묘
        5 | 6 => Element::Fire,          // 사, 오
        8 | 9 => Element::Metal,         // 신, 유
        _ => panic!("branch index out of range: {}", branch_index),
    }
}

/// Parity of each branch: even indices (자 인 진 오 신 술) are yang, odd are yin.
pub fn branch_parity(branch_index: usize) -> Parity {
    assert!(branch_index < 12, "branch index out of range: {}", branch_index);
    if branch_index % 2 == 0 {
        Parity::Yang
    } else {
        Parity::Yin
    }
}

// ============================================================================
// APPROXIMATION TABLES
// ============================================================================

/// Calendar month (1..=12) → offset added to reach the approximate lunar
/// month. This is a frozen legacy heuristic, not a lunisolar conversion;
/// it is reproduced as-is and must not be "corrected".
pub const LUNAR_MONTH_OFFSETS: [u32; 12] = [0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6];

/// Per-month season start: (start day, season name). The season applies from
/// that day onward within the month. Start days follow the usual solar-term
/// dates, which in reality drift ±1 day by year; that drift is not modeled.
pub const SEASON_STARTS: [(u32, &str); 12] = [
    (6, "겨울"), // 1월 소한
    (4, "봄"),   // 2월 입춘
    (6, "봄"),   // 3월 경칩
    (5, "봄"),   // 4월 청명
    (6, "여름"), // 5월 입하
    (6, "여름"), // 6월 망종
    (7, "여름"), // 7월 소서
    (8, "가을"), // 8월 입추
    (8, "가을"), // 9월 백로
    (8, "가을"), // 10월 한로
    (7, "겨울"), // 11월 입동
    (7, "겨울"), // 12월 대설
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_tables_align() {
        assert_eq!(HEAVENLY_STEMS.len(), HEAVENLY_STEMS_HANJA.len());
        assert_eq!(HEAVENLY_STEMS[0], "갑");
        assert_eq!(HEAVENLY_STEMS[6], "경");
        assert_eq!(HEAVENLY_STEMS_HANJA[6], "庚");
    }

    #[test]
    fn test_branch_tables_align() {
        assert_eq!(EARTHLY_BRANCHES.len(), EARTHLY_BRANCHES_HANJA.len());
        assert_eq!(EARTHLY_BRANCHES[0], "자");
        assert_eq!(EARTHLY_BRANCHES[11], "해");
        assert_eq!(EARTHLY_BRANCHES_HANJA[11], "亥");
    }

    #[test]
    fn test_stem_elements_total() {
        // Every stem resolves to one of the five elements, two stems each.
        let mut counts = std::collections::HashMap::new();
        for i in 0..10 {
            *counts.entry(stem_element(i)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_branch_elements_total() {
        for i in 0..12 {
            branch_element(i); // must not panic
        }
        assert_eq!(branch_element(0), Element::Water);
        assert_eq!(branch_element(1), Element::Earth);
        assert_eq!(branch_element(2), Element::Wood);
        assert_eq!(branch_element(8), Element::Metal);
    }

    #[test]
    fn test_parity_alternates() {
        // Five yang stems out of ten, six yang branches out of twelve.
        let yang_stems = (0..10).filter(|&i| stem_parity(i) == Parity::Yang).count();
        let yang_branches = (0..12).filter(|&i| branch_parity(i) == Parity::Yang).count();
        assert_eq!(yang_stems, 5);
        assert_eq!(yang_branches, 6);
    }

    #[test]
    fn test_lunar_offset_table_shape() {
        assert_eq!(LUNAR_MONTH_OFFSETS.len(), 12);
        assert_eq!(LUNAR_MONTH_OFFSETS[0], 0);
        assert_eq!(LUNAR_MONTH_OFFSETS[11], 6);
    }
}
