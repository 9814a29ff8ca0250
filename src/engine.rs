// 🔮 Saju Engine - Four Pillars computation
// Converts a Gregorian birth instant into the four stem/branch pillars,
// derives the day-stem element and computes ten-god labels.
//
// The calendar math is deliberately approximate where the reference
// behavior is approximate (year anchor, lunar month table, season table)
// and exact where it matters: the day pillar is based on exact proleptic
// Gregorian day counting from the 1900-01-01 epoch via chrono.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elements::{Element, TenGod};
use crate::tables::{
    branch_element, branch_parity, stem_element, stem_parity, EARTHLY_BRANCHES,
    EARTHLY_BRANCHES_HANJA, HEAVENLY_STEMS, HEAVENLY_STEMS_HANJA, LUNAR_MONTH_OFFSETS,
    SEASON_STARTS,
};

// ============================================================================
// ERROR
// ============================================================================

/// The engine's only failure mode: the input is not a real date/time.
/// Deterministic input error; never retried, surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SajuError {
    #[error("invalid birth date/time: {0}")]
    InvalidDate(String),
}

// ============================================================================
// PILLAR
// ============================================================================

/// One stem/branch pair of the chart. Holds indices into the fixed tables;
/// glyphs and hanja are resolved on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem_index: usize,
    pub branch_index: usize,
}

impl Pillar {
    fn new(stem_index: usize, branch_index: usize) -> Self {
        Pillar {
            stem_index,
            branch_index,
        }
    }

    /// Stem glyph, e.g. "경".
    pub fn stem(&self) -> &'static str {
        HEAVENLY_STEMS[self.stem_index]
    }

    /// Branch glyph, e.g. "해".
    pub fn branch(&self) -> &'static str {
        EARTHLY_BRANCHES[self.branch_index]
    }

    /// Hanja rendering of the stem, e.g. "庚".
    pub fn stem_hanja(&self) -> &'static str {
        HEAVENLY_STEMS_HANJA[self.stem_index]
    }

    /// Hanja rendering of the branch, e.g. "亥".
    pub fn branch_hanja(&self) -> &'static str {
        EARTHLY_BRANCHES_HANJA[self.branch_index]
    }

    /// Display form: stem glyph followed by branch glyph, e.g. "경오".
    pub fn display(&self) -> String {
        format!("{}{}", self.stem(), self.branch())
    }

    pub fn stem_element(&self) -> Element {
        stem_element(self.stem_index)
    }

    pub fn branch_element(&self) -> Element {
        branch_element(self.branch_index)
    }
}

// ============================================================================
// FOUR PILLARS
// ============================================================================

/// The complete chart: year, month, day and hour pillars, all computed
/// together from one birth instant. Pure value, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Element of the day stem, the chart's reference element.
    pub fn day_element(&self) -> Element {
        self.day.stem_element()
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Stateless Four Pillars calculator. All methods are pure functions over
/// the fixed tables; the engine carries no state and is safe to share
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SajuEngine;

/// Day-pillar epoch: first day of 1900. Day offsets are counted from here.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("epoch date is valid")
}

impl SajuEngine {
    pub fn new() -> Self {
        SajuEngine
    }

    /// Compute the four pillars for a birth instant.
    ///
    /// Fails with `SajuError::InvalidDate` when (year, month, day) is not a
    /// real calendar date or hour/minute are out of range; validation happens
    /// before any pillar arithmetic, so there is never a partial result.
    pub fn compute_four_pillars(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<FourPillars, SajuError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            SajuError::InvalidDate(format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day))
        })?;
        if hour > 23 || minute > 59 {
            return Err(SajuError::InvalidDate(format!(
                "{:02}:{:02} is not a valid time",
                hour, minute
            )));
        }

        // Year pillar. The -4 anchor puts year 4 CE at cycle position zero;
        // frozen legacy constant, not a verified historical epoch.
        let year_cycle = i64::from(year) - 4;
        let year_stem = year_cycle.rem_euclid(10) as usize;
        let year_branch = year_cycle.rem_euclid(12) as usize;

        // Month pillar, from the approximate lunar month.
        let lunar_month = self.approximate_lunar_month(month);
        let month_stem = (year_stem * 2 + lunar_month as usize) % 10;
        let month_branch = (lunar_month as usize + 1) % 12;

        // Day pillar: exact whole-day offset from the 1900-01-01 epoch.
        // rem_euclid keeps pre-1900 dates on the same cycle.
        let offset = date.signed_duration_since(epoch()).num_days();
        let day_stem = (offset + 1).rem_euclid(10) as usize;
        let day_branch = (offset + 1).rem_euclid(12) as usize;

        // Hour pillar: two-hour bins. The +1 offset folds hour 23 and hour 0
        // into the same Rat (자) bin.
        let hour_branch = (((hour + 1) / 2) % 12) as usize;
        let hour_stem = (day_stem * 2 + hour_branch) % 10;

        Ok(FourPillars {
            year: Pillar::new(year_stem, year_branch),
            month: Pillar::new(month_stem, month_branch),
            day: Pillar::new(day_stem, day_branch),
            hour: Pillar::new(hour_stem, hour_branch),
        })
    }

    /// Element of a stem; total over the 10 valid stem indices.
    pub fn compute_element(&self, stem_index: usize) -> Element {
        stem_element(stem_index)
    }

    /// Ten-god label of a target stem relative to the day stem.
    pub fn compute_ten_god(&self, day_stem: usize, target_stem: usize) -> TenGod {
        TenGod::classify(
            (stem_element(day_stem), stem_parity(day_stem)),
            (stem_element(target_stem), stem_parity(target_stem)),
        )
    }

    /// Ten-god label of a target branch relative to the day stem.
    pub fn compute_branch_ten_god(&self, day_stem: usize, target_branch: usize) -> TenGod {
        TenGod::classify(
            (stem_element(day_stem), stem_parity(day_stem)),
            (branch_element(target_branch), branch_parity(target_branch)),
        )
    }

    /// Approximate lunar month for a calendar month (1..=12): add a fixed
    /// per-month offset and wrap back into 1..=12. Coarse heuristic carried
    /// over from the reference behavior; not a lunisolar conversion.
    pub fn approximate_lunar_month(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month out of range: {}", month);
        let lunar = month + LUNAR_MONTH_OFFSETS[(month - 1) as usize];
        if lunar > 12 {
            lunar - 12
        } else {
            lunar
        }
    }

    /// Approximate season for a month/day: each month has a fixed start day
    /// (solar-term approximation); the season name applies from that day on.
    /// Returns None before the month's start day.
    pub fn approximate_season(&self, month: u32, day: u32) -> Option<&'static str> {
        assert!((1..=12).contains(&month), "month out of range: {}", month);
        let (start_day, season) = SEASON_STARTS[(month - 1) as usize];
        if day >= start_day {
            Some(season)
        } else {
            None
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Parity;

    fn engine() -> SajuEngine {
        SajuEngine::new()
    }

    #[test]
    fn test_deterministic() {
        let a = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        let b = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_offsets_across_centuries() {
        // (date, expected day offset from 1900-01-01), verified by direct
        // date arithmetic. Day indices must be (offset + 1) mod 10 / mod 12.
        let fixtures: [(i32, u32, u32, i64); 6] = [
            (1900, 1, 1, 0),
            (1900, 1, 2, 1),
            (1950, 6, 15, 18427),
            (1997, 5, 7, 35555),
            (2000, 1, 1, 36524),
            (2100, 3, 1, 73108),
        ];
        for (y, m, d, offset) in fixtures {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(date.signed_duration_since(epoch()).num_days(), offset);

            let pillars = engine().compute_four_pillars(y, m, d, 12, 0).unwrap();
            assert_eq!(pillars.day.stem_index, ((offset + 1) % 10) as usize);
            assert_eq!(pillars.day.branch_index, ((offset + 1) % 12) as usize);
        }
    }

    #[test]
    fn test_leap_day_offset() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let offset = date.signed_duration_since(epoch()).num_days();
        assert_eq!(offset, 45349);
        let pillars = engine().compute_four_pillars(2024, 2, 29, 0, 0).unwrap();
        assert_eq!(pillars.day.stem_index, 0);
        assert_eq!(pillars.day.branch_index, 2);
    }

    #[test]
    fn test_regression_1997_05_07() {
        // Reference fixture: 1997-05-07 21:30 → day stem 경, element 금.
        let pillars = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        assert_eq!(pillars.day.stem(), "경");
        assert_eq!(pillars.day_element(), Element::Metal);
        assert_eq!(pillars.day_element().korean(), "금");
        // Hour 21 falls in the 해 bin.
        assert_eq!(pillars.hour.branch_index, 11);
        assert_eq!(pillars.hour.branch(), "해");
        // Year pillar: (1997 - 4) mod 10 = 3 (정), mod 12 = 1 (축).
        assert_eq!(pillars.year.display(), "정축");
    }

    #[test]
    fn test_hour_bins() {
        let e = engine();
        let at_hour = |h| e.compute_four_pillars(1997, 5, 7, h, 0).unwrap().hour.branch_index;
        assert_eq!(at_hour(21), 11);
        // Hours 23 and 0 wrap into the same Rat bin.
        assert_eq!(at_hour(23), 0);
        assert_eq!(at_hour(0), 0);
        assert_eq!(at_hour(23), at_hour(0));
        assert_eq!(at_hour(1), 1);
    }

    #[test]
    fn test_hour_stem_follows_day_stem() {
        let pillars = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        let expected = (pillars.day.stem_index * 2 + pillars.hour.branch_index) % 10;
        assert_eq!(pillars.hour.stem_index, expected);
    }

    #[test]
    fn test_compute_element_range_and_purity() {
        let e = engine();
        for stem in 0..10 {
            let first = e.compute_element(stem);
            let second = e.compute_element(stem);
            assert_eq!(first, second);
            assert!(Element::all().contains(&first));
        }
    }

    #[test]
    fn test_ten_god_self_is_friend() {
        let e = engine();
        for stem in 0..10 {
            assert_eq!(e.compute_ten_god(stem, stem), TenGod::Friend);
        }
    }

    #[test]
    fn test_ten_god_never_unknown() {
        let e = engine();
        for day in 0..10 {
            for target in 0..10 {
                assert_ne!(e.compute_ten_god(day, target), TenGod::Unknown);
            }
            for branch in 0..12 {
                assert_ne!(e.compute_branch_ten_god(day, branch), TenGod::Unknown);
            }
        }
    }

    #[test]
    fn test_branch_ten_god_known_pairs() {
        let e = engine();
        // Day stem 갑 (Wood, Yang): 자 is Water/Yang → 편인, 해 is Water/Yin → 정인.
        assert_eq!(stem_parity(0), Parity::Yang);
        assert_eq!(e.compute_branch_ten_god(0, 0), TenGod::IndirectResource);
        assert_eq!(e.compute_branch_ten_god(0, 11), TenGod::DirectResource);
    }

    #[test]
    fn test_invalid_inputs_fail_closed() {
        let e = engine();
        assert!(e.compute_four_pillars(1997, 13, 1, 0, 0).is_err());
        assert!(e.compute_four_pillars(1997, 1, 32, 0, 0).is_err());
        assert!(e.compute_four_pillars(1997, 2, 30, 0, 0).is_err());
        assert!(e.compute_four_pillars(1999, 2, 29, 0, 0).is_err());
        assert!(e.compute_four_pillars(1997, 5, 7, 24, 0).is_err());
        assert!(e.compute_four_pillars(1997, 5, 7, 0, 60).is_err());
        assert!(e.compute_four_pillars(1997, 0, 7, 0, 0).is_err());
        assert!(e.compute_four_pillars(1997, 5, 0, 0, 0).is_err());
    }

    #[test]
    fn test_invalid_date_error_kind() {
        let err = engine().compute_four_pillars(1997, 2, 30, 0, 0).unwrap_err();
        assert!(matches!(err, SajuError::InvalidDate(_)));
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(engine().compute_four_pillars(2024, 2, 29, 12, 0).is_ok());
    }

    #[test]
    fn test_approximate_lunar_month() {
        let e = engine();
        assert_eq!(e.approximate_lunar_month(1), 1);
        assert_eq!(e.approximate_lunar_month(5), 7);
        // December: 12 + 6 = 18 wraps to 6.
        assert_eq!(e.approximate_lunar_month(12), 6);
        for month in 1..=12 {
            let lunar = e.approximate_lunar_month(month);
            assert!((1..=12).contains(&lunar));
        }
    }

    #[test]
    fn test_month_pillar_formula() {
        let pillars = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        // Year stem 3 (정), lunar month 5 + 2 = 7.
        assert_eq!(pillars.month.stem_index, (3 * 2 + 7) % 10);
        assert_eq!(pillars.month.branch_index, (7 + 1) % 12);
    }

    #[test]
    fn test_approximate_season() {
        let e = engine();
        assert_eq!(e.approximate_season(2, 4), Some("봄"));
        assert_eq!(e.approximate_season(2, 3), None);
        assert_eq!(e.approximate_season(5, 6), Some("여름"));
        assert_eq!(e.approximate_season(5, 5), None);
        assert_eq!(e.approximate_season(8, 8), Some("가을"));
        assert_eq!(e.approximate_season(1, 6), Some("겨울"));
        assert_eq!(e.approximate_season(12, 31), Some("겨울"));
    }

    #[test]
    fn test_pre_epoch_dates_stay_on_cycle() {
        // 1899-12-31 is offset -1: indices (−1 + 1) = 0 under euclidean mod.
        let pillars = engine().compute_four_pillars(1899, 12, 31, 0, 0).unwrap();
        assert_eq!(pillars.day.stem_index, 0);
        assert_eq!(pillars.day.branch_index, 0);
    }

    #[test]
    fn test_pillar_display_and_hanja() {
        let pillars = engine().compute_four_pillars(1997, 5, 7, 21, 30).unwrap();
        assert_eq!(pillars.day.stem_hanja(), "庚");
        assert_eq!(pillars.day.display().chars().count(), 2);
    }
}
