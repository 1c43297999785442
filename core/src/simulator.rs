//! Scenario simulator — drives a playthrough month by month.
//!
//! EXECUTION ORDER per month (fixed, never reordered):
//!   1. Catalog growth (scenario rate and cap, family-first ceiling)
//!   2. Financials → bank
//!   3. Scripted family penalty for this month
//!   4. Stress tick / burnout, or decay and recovery countdown
//!   5. Building milestone at the deadline month
//!   6. Months-since-building bookkeeping
//!   7. History append
//!
//! Months advance 1..=N with no skipping. A negative bank is tracked,
//! never an error: there is no early termination on bankruptcy.

use crate::{
    financials::{calculate_monthly_financials, round_euros, Difficulty},
    reference::{BalanceRef, StressZone},
    state::PlaythroughState,
    stress::simulate_stress_tick,
    types::{Euros, Month, Stat},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Family and relationship life events, as bank impact by month.
/// Scaled by the scenario's penalty intensity.
pub const FAMILY_PENALTIES: &[(Month, Euros)] = &[
    (8,  -1_000.0),
    (9,  -800.0),
    (10, -2_000.0),
    (11, -1_200.0),
    (12, -1_500.0),
    (14, -1_800.0),
    (16, -1_000.0),
    (18, -4_000.0),
    (19, -2_000.0),
    (20, -4_500.0),
    (22, -2_500.0),
];

/// How a scenario plays the game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    pub name:                String,
    pub months:              Month,
    pub open_sunday:         bool,
    /// 0 = no family penalties, 1 = the full schedule.
    pub family_penalty_mult: f64,
    pub cheese_growth_rate:  f64,
    pub cheese_cap:          u32,
    pub difficulty:          Difficulty,
    /// Average random-variance multiplier applied every month.
    pub variance:            f64,
    pub apply_stress:        bool,
    pub buy_building_at_25:  bool,
}

impl ScenarioConfig {
    pub fn new(name: impl Into<String>, months: Month, open_sunday: bool) -> Self {
        Self {
            name: name.into(),
            months,
            open_sunday,
            family_penalty_mult: 0.0,
            cheese_growth_rate:  1.2,
            cheese_cap:          45,
            difficulty:          Difficulty::Realistic,
            variance:            1.0,
            apply_stress:        true,
            buy_building_at_25:  false,
        }
    }

    pub fn with_family_penalty(mut self, mult: f64) -> Self {
        self.family_penalty_mult = mult;
        self
    }

    pub fn with_cheese_growth(mut self, rate: f64, cap: u32) -> Self {
        self.cheese_growth_rate = rate;
        self.cheese_cap = cap;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    pub fn with_stress(mut self, apply_stress: bool) -> Self {
        self.apply_stress = apply_stress;
        self
    }

    pub fn buying_building(mut self) -> Self {
        self.buy_building_at_25 = true;
        self
    }

    /// Penalties that fall inside this run, scaled by intensity.
    pub fn penalty_schedule(&self) -> BTreeMap<Month, Euros> {
        let mut schedule = BTreeMap::new();
        if self.family_penalty_mult <= 0.0 {
            return schedule;
        }
        for &(month, amount) in FAMILY_PENALTIES {
            if month <= self.months {
                *schedule.entry(month).or_insert(0.0) += amount * self.family_penalty_mult;
            }
        }
        schedule
    }

    /// Catalog size for a month, given the months already played.
    pub fn cheese_types_for(&self, months_played: Month) -> u32 {
        let grown = (5.0 + months_played as f64 * self.cheese_growth_rate) as u32;
        let mut cheese = grown.min(self.cheese_cap);
        if !self.open_sunday && self.family_penalty_mult >= BalanceRef::FAMILY_FIRST_INTENSITY {
            cheese = cheese.min(BalanceRef::FAMILY_FIRST_CHEESE_CAP);
        }
        cheese
    }
}

/// Summary of one run. Built during the run, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioResult {
    pub name:            String,
    pub bank_by_month:   Vec<Euros>,
    pub stress_by_month: Vec<Stat>,
    /// Month of the first burnout, if any.
    pub burnout_month:   Option<Month>,
    pub bank_at_25:      Option<Euros>,
    pub bank_at_end:     Option<Euros>,
    pub owns_building:   bool,
    pub months_played:   Month,
}

impl ScenarioResult {
    fn new(name: &str) -> Self {
        Self {
            name:            name.to_string(),
            bank_by_month:   Vec::new(),
            stress_by_month: Vec::new(),
            burnout_month:   None,
            bank_at_25:      None,
            bank_at_end:     None,
            owns_building:   false,
            months_played:   0,
        }
    }

    fn record_month(&mut self, month: Month, state: &PlaythroughState) {
        let bank = round_euros(state.bank);
        self.bank_by_month.push(bank);
        self.stress_by_month.push(state.stress);
        self.bank_at_end = Some(bank);
        self.months_played = month;
    }

    pub fn peak_stress(&self) -> Option<Stat> {
        self.stress_by_month.iter().copied().max()
    }

    pub fn peak_stress_zone(&self) -> Option<StressZone> {
        self.peak_stress().map(StressZone::classify)
    }
}

/// Run a scenario from `seed` for `config.months` months.
/// The seed state is cloned; the caller's copy is never touched.
pub fn run_simulation(seed: &PlaythroughState, config: &ScenarioConfig) -> ScenarioResult {
    let mut state = seed.clone();
    state.open_sunday = config.open_sunday;
    let penalties = config.penalty_schedule();
    let mut result = ScenarioResult::new(&config.name);

    log::debug!(
        "scenario '{}': months={} sunday={} family={:.2} difficulty={}",
        config.name, config.months, config.open_sunday, config.family_penalty_mult, config.difficulty
    );

    for month in 1..=config.months {
        state.enter_month(month);

        state.cheese_types = config.cheese_types_for(state.months_played);

        let financials = calculate_monthly_financials(&state, config.difficulty, config.variance);
        state.bank += financials.net_profit;
        if let Some(penalty) = penalties.get(&month) {
            state.bank += penalty;
        }

        if config.apply_stress {
            if config.open_sunday && state.burnout_recovery_months == 0 {
                state.stress = simulate_stress_tick(&state);
                // Only the first burnout of a run is recorded and applied.
                if result.burnout_month.is_none() && state.burnout_due() {
                    result.burnout_month = Some(month);
                    state.apply_burnout();
                    log::info!("scenario '{}': burnout at month {month}", config.name);
                }
            } else {
                state.recover();
            }
        }

        if month == BalanceRef::BUILDING_DEADLINE_MONTH {
            result.bank_at_25 = Some(round_euros(state.bank));
            if config.buy_building_at_25 && state.bank >= BalanceRef::BUILDING_COST {
                state.purchase_building(BalanceRef::BUILDING_COST);
                result.owns_building = true;
                log::info!("scenario '{}': building purchased at month {month}", config.name);
            }
        }
        if state.owns_building {
            state.months_since_building = month.saturating_sub(BalanceRef::BUILDING_DEADLINE_MONTH);
        }

        log::debug!(
            "scenario '{}' month={month} cheese={} net={} bank={:.0} stress={}",
            config.name, state.cheese_types, financials.net_profit, state.bank, state.stress
        );

        result.record_month(month, &state);
    }

    result
}

/// The post-purchase stretch: from the month after the deadline to the
/// end of the game, with the full owner lifestyle costs running.
///
/// No stress model; catalog grows by one per month up to 50.
pub fn run_post_building(seed: &PlaythroughState) -> ScenarioResult {
    let mut state = seed.clone();
    let mut result = ScenarioResult::new("Post-building");
    let first = BalanceRef::BUILDING_DEADLINE_MONTH + 1;

    for month in first..=BalanceRef::MAX_MONTHS {
        state.enter_month(month);
        state.months_since_building = month - BalanceRef::BUILDING_DEADLINE_MONTH;
        state.cheese_types = (40 + state.months_since_building).min(50);

        let financials = calculate_monthly_financials(&state, Difficulty::Realistic, 1.0);
        state.bank += financials.net_profit;

        log::debug!(
            "post-building month={month} since={} net={} bank={:.0}",
            state.months_since_building, financials.net_profit, state.bank
        );

        result.record_month(month, &state);
    }
    result.owns_building = state.owns_building;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_schedule_respects_run_length_and_intensity() {
        let config = ScenarioConfig::new("half", 12, false).with_family_penalty(0.5);
        let schedule = config.penalty_schedule();
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule[&8], -500.0);
        assert_eq!(schedule[&12], -750.0);
        assert!(!schedule.contains_key(&14));

        let none = ScenarioConfig::new("none", 25, true);
        assert!(none.penalty_schedule().is_empty());
    }

    #[test]
    fn family_first_catalog_ceiling() {
        let family = ScenarioConfig::new("family", 40, false)
            .with_family_penalty(1.0)
            .with_cheese_growth(2.0, 60);
        assert_eq!(family.cheese_types_for(30), 35);

        let grind = ScenarioConfig::new("grind", 40, true)
            .with_family_penalty(1.0)
            .with_cheese_growth(2.0, 60);
        assert_eq!(grind.cheese_types_for(30), 60);
    }

    #[test]
    fn catalog_growth_truncates() {
        let config = ScenarioConfig::new("x", 10, true).with_cheese_growth(1.35, 42);
        assert_eq!(config.cheese_types_for(0), 5);
        assert_eq!(config.cheese_types_for(3), 9); // 5 + 4.05
        assert_eq!(config.cheese_types_for(40), 42);
    }

    #[test]
    fn seed_state_is_not_mutated() {
        let seed = PlaythroughState::default();
        let before = seed.clone();
        let _ = run_simulation(&seed, &ScenarioConfig::new("x", 12, true));
        assert_eq!(seed, before);
    }

    #[test]
    fn history_has_one_entry_per_month() {
        let r = run_simulation(&PlaythroughState::default(), &ScenarioConfig::new("x", 7, false));
        assert_eq!(r.bank_by_month.len(), 7);
        assert_eq!(r.stress_by_month.len(), 7);
        assert_eq!(r.months_played, 7);
        assert_eq!(r.bank_at_end, r.bank_by_month.last().copied());
        assert_eq!(r.bank_at_25, None);
    }

    #[test]
    fn zero_month_run_is_empty() {
        let r = run_simulation(&PlaythroughState::default(), &ScenarioConfig::new("x", 0, true));
        assert!(r.bank_by_month.is_empty());
        assert_eq!(r.bank_at_end, None);
        assert_eq!(r.peak_stress(), None);
    }
}
