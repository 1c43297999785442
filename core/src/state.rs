//! Playthrough state — the one stateful entity of a simulated run.
//!
//! A run clones its seed state once, mutates the copy month by month,
//! and drops it after the final values are captured in a ScenarioResult.

use crate::{
    reference::BalanceRef,
    types::{Euros, Month, Stat},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaythroughState {
    // ── Calendar ───────────────────────────────
    pub month:         Month,
    /// Months elapsed before the current one.
    pub months_played: Month,

    // ── Money ──────────────────────────────────
    pub bank:              Euros,
    pub loan:              Euros,
    pub monthly_payment:   Euros,
    pub monthly_insurance: Euros,

    // ── Business ───────────────────────────────
    pub cheese_types: u32,
    pub reputation:   Stat,
    pub autonomy:     Stat,

    // ── Wellbeing ──────────────────────────────
    pub energy:                  Stat,
    pub stress:                  Stat,
    pub family:                  Stat,
    pub max_energy_cap:          Stat,
    pub burnout_count:           u32,
    pub burnout_recovery_months: u32,

    // ── Flags ──────────────────────────────────
    pub open_sunday:             bool,
    pub has_lucas:               bool,
    pub has_henry:               bool,
    pub has_dog:                 bool,
    pub owns_building:           bool,
    pub salary_started:          bool,
    pub has_charcuterie:         bool,
    pub has_wine_selection:      bool,
    pub has_corporate_client:    bool,
    pub has_wine_events:         bool,
    pub extended_hours:          bool,
    pub has_car:                 bool,
    pub has_apartment:           bool,
    pub building_offer_received: bool,

    /// Months since the building purchase. Only meaningful once owned.
    pub months_since_building: u32,
}

impl Default for PlaythroughState {
    fn default() -> Self {
        Self {
            month:                   1,
            months_played:           0,
            bank:                    BalanceRef::START_BANK_HIGH,
            loan:                    0.0,
            monthly_payment:         0.0,
            monthly_insurance:       0.0,
            cheese_types:            0,
            reputation:              50,
            autonomy:                20,
            energy:                  100,
            stress:                  30,
            family:                  70,
            max_energy_cap:          100,
            burnout_count:           0,
            burnout_recovery_months: 0,
            open_sunday:             false,
            has_lucas:               false,
            has_henry:               false,
            has_dog:                 false,
            owns_building:           false,
            salary_started:          false,
            has_charcuterie:         false,
            has_wine_selection:      false,
            has_corporate_client:    false,
            has_wine_events:         false,
            extended_hours:          false,
            has_car:                 false,
            has_apartment:           false,
            building_offer_received: false,
            months_since_building:   0,
        }
    }
}

impl PlaythroughState {
    /// Position the calendar at `month`. Months played trails by one.
    pub fn enter_month(&mut self, month: Month) {
        self.month = month;
        self.months_played = month.saturating_sub(1);
    }

    /// Either helper relationship is present.
    pub fn has_helper(&self) -> bool {
        self.has_lucas || self.has_henry
    }

    /// Whether a burnout may fire at the current stress level.
    /// Never true while a recovery window is active.
    pub fn burnout_due(&self) -> bool {
        self.burnout_recovery_months == 0
            && self.stress >= BalanceRef::STRESS_BURNOUT_THRESHOLD
            && self.months_played >= BalanceRef::BURNOUT_MIN_MONTHS_PLAYED
    }

    /// Crash: reset stress, open the recovery window, and permanently
    /// lower the energy ceiling.
    pub fn apply_burnout(&mut self) {
        self.burnout_count += 1;
        self.burnout_recovery_months = BalanceRef::BURNOUT_RECOVERY_MONTHS;
        self.stress = BalanceRef::BURNOUT_RESET_STRESS;
        self.max_energy_cap = (self.max_energy_cap - BalanceRef::ENERGY_REDUCTION_PER_BURNOUT)
            .max(BalanceRef::MIN_ENERGY_CAP);
        self.clamp_stats();
    }

    /// One month of recovery: stress decays, the window counts down.
    pub fn recover(&mut self) {
        self.burnout_recovery_months = self.burnout_recovery_months.saturating_sub(1);
        self.stress = (self.stress - BalanceRef::STRESS_DECAY_PER_MONTH).max(0);
    }

    /// Buy the building: pay for it and switch to the owner cost model.
    pub fn purchase_building(&mut self, cost: Euros) {
        self.bank -= cost;
        self.owns_building = true;
        self.salary_started = true;
        self.months_since_building = 0;
    }

    /// Enforce the 0–100 ranges; energy is additionally capped by the
    /// burnout-reduced ceiling.
    pub fn clamp_stats(&mut self) {
        self.stress = self.stress.clamp(0, 100);
        self.reputation = self.reputation.clamp(0, 100);
        self.autonomy = self.autonomy.clamp(0, 100);
        self.family = self.family.clamp(0, 100);
        self.max_energy_cap = self.max_energy_cap.clamp(0, 100);
        self.energy = self.energy.clamp(0, self.max_energy_cap);
    }
}
