//! Tuning targets from the balance reference document.
//!
//! RULE: Every threshold a check compares against lives here.
//! Checks never inline a magic number that belongs to the reference.

use crate::types::{Euros, Month, Stat};
use serde::{Deserialize, Serialize};

pub struct BalanceRef;

impl BalanceRef {
    // ── Money ──────────────────────────────────────────────────
    pub const START_BANK_LOW: Euros = 0.0;
    pub const START_BANK_HIGH: Euros = 12_000.0;
    pub const BUILDING_COST: Euros = 80_000.0;
    pub const BUILDING_DEADLINE_MONTH: Month = 25;
    pub const MAX_MONTHS: Month = 42;
    /// ~50k at the end of the game, NOT 100k.
    pub const END_TARGET_BANK: Euros = 50_000.0;
    /// Above this, post-building expenses are too low.
    pub const END_BANK_MAX_ACCEPTABLE: Euros = 75_000.0;
    /// Should be well below the building cost (e.g. ~35k).
    pub const FAMILY_FIRST_MONTH_25_MAX: Euros = 50_000.0;
    /// Share of the building cost a grind run must reach by the deadline.
    pub const GRIND_BUILDING_SHARE: f64 = 0.85;

    // ── Stress ─────────────────────────────────────────────────
    pub const STRESS_BURNOUT_THRESHOLD: Stat = 80;
    pub const STRESS_DANGER_ZONE_LOW: Stat = 60;
    pub const STRESS_DANGER_ZONE_HIGH: Stat = 70;
    pub const SUNDAY_BURNOUT_MONTH_MIN: Month = 6;
    pub const SUNDAY_BURNOUT_MONTH_MAX: Month = 10;

    // ── Burnout mechanics ──────────────────────────────────────
    /// Honeymoon: no burnout before this many months have been played.
    pub const BURNOUT_MIN_MONTHS_PLAYED: Month = 6;
    pub const BURNOUT_RECOVERY_MONTHS: u32 = 4;
    pub const BURNOUT_RESET_STRESS: Stat = 40;
    pub const ENERGY_REDUCTION_PER_BURNOUT: Stat = 20;
    pub const MIN_ENERGY_CAP: Stat = 20;
    /// Monthly stress decay while recovering or with Sundays closed.
    pub const STRESS_DECAY_PER_MONTH: Stat = 5;

    // ── Play-style shaping ─────────────────────────────────────
    /// Catalog ceiling for a family-first player with Sundays closed.
    pub const FAMILY_FIRST_CHEESE_CAP: u32 = 35;
    /// Penalty intensity from which the family-first catalog ceiling applies.
    pub const FAMILY_FIRST_INTENSITY: f64 = 0.8;

    // ── Formula constants ──────────────────────────────────────
    pub const BASE_MONTHLY_SALES: Euros = 19_000.0;
    pub const MONTHLY_RENT: Euros = 1_900.0;
    pub const BUILDING_LOAN_PAYMENT: Euros = 2_500.0;
    /// Monthly interest on outstanding loan principal.
    pub const LOAN_INTEREST_RATE: f64 = 0.06;
    /// Share of positive profit kept after tax and reinvestment.
    pub const AFTER_TAX_RETENTION: f64 = 0.80;
}

/// Where a stress level sits relative to the reference thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StressZone {
    Calm,
    Danger,
    Critical,
    Burnout,
}

impl StressZone {
    pub fn classify(stress: Stat) -> Self {
        if stress >= BalanceRef::STRESS_BURNOUT_THRESHOLD {
            Self::Burnout
        } else if stress >= BalanceRef::STRESS_DANGER_ZONE_HIGH {
            Self::Critical
        } else if stress >= BalanceRef::STRESS_DANGER_ZONE_LOW {
            Self::Danger
        } else {
            Self::Calm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm     => "calm",
            Self::Danger   => "danger zone",
            Self::Critical => "critical zone",
            Self::Burnout  => "burnout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_follow_reference_thresholds() {
        assert_eq!(StressZone::classify(0), StressZone::Calm);
        assert_eq!(StressZone::classify(59), StressZone::Calm);
        assert_eq!(StressZone::classify(60), StressZone::Danger);
        assert_eq!(StressZone::classify(70), StressZone::Critical);
        assert_eq!(StressZone::classify(79), StressZone::Critical);
        assert_eq!(StressZone::classify(80), StressZone::Burnout);
        assert_eq!(StressZone::classify(100), StressZone::Burnout);
    }
}
