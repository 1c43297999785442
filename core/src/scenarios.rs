//! Play-style scenarios and the targets they are judged against.
//!
//! Each check configures the simulator for one way of playing, runs it,
//! and compares the summary with the balance reference. The scenario
//! table is data; the judgments are small pure functions over results.

use crate::{
    check::BalanceCheck,
    config::HarnessConfig,
    error::{BalanceError, BalanceResult},
    financials::{calculate_monthly_financials, Difficulty},
    reference::BalanceRef,
    report::{format_eur, ReportLine},
    simulator::{run_post_building, run_simulation, ScenarioConfig, ScenarioResult},
    state::PlaythroughState,
    types::Euros,
};

// ── Scenario table ─────────────────────────────────────────────

/// Sundays closed, every family event paid for, modest catalog.
pub fn family_first() -> ScenarioConfig {
    ScenarioConfig::new("Family-first", BalanceRef::BUILDING_DEADLINE_MONTH, false)
        .with_family_penalty(1.0)
        .with_cheese_growth(1.0, 35)
}

/// Sundays open, family events skipped, fast catalog growth, good months.
pub fn grind() -> ScenarioConfig {
    ScenarioConfig::new("Grind", BalanceRef::BUILDING_DEADLINE_MONTH, true)
        .with_cheese_growth(1.5, 45)
        .with_variance(1.02)
}

/// Sundays open from the start with nobody to help.
pub fn sunday_burnout() -> ScenarioConfig {
    ScenarioConfig::new("Sunday burnout", 15, true)
}

/// Some family, some grind.
pub fn balanced() -> ScenarioConfig {
    ScenarioConfig::new("Balanced", BalanceRef::BUILDING_DEADLINE_MONTH, true)
        .with_family_penalty(0.5)
        .with_cheese_growth(1.35, 42)
}

/// Catalog-driven growth with a little family sacrifice.
pub fn cheese_focus() -> ScenarioConfig {
    ScenarioConfig::new("Cheese focus", BalanceRef::BUILDING_DEADLINE_MONTH, true)
        .with_family_penalty(0.2)
        .with_cheese_growth(1.8, 55)
        .with_variance(1.02)
}

/// Full owner lifestyle right after buying with ~10k left over.
pub fn post_building_seed() -> PlaythroughState {
    PlaythroughState {
        month:                 BalanceRef::BUILDING_DEADLINE_MONTH + 1,
        bank:                  10_000.0,
        cheese_types:          40,
        reputation:            55,
        autonomy:              50,
        has_lucas:             true,
        has_henry:             true,
        owns_building:         true,
        salary_started:        true,
        months_since_building: 0,
        has_car:               true,
        has_apartment:         true,
        ..Default::default()
    }
}

fn bank_at_25(result: &ScenarioResult) -> BalanceResult<Euros> {
    result.bank_at_25.ok_or_else(|| BalanceError::MissingSummaryField {
        scenario: result.name.clone(),
        field:    "bank_at_25",
    })
}

fn bank_at_end(result: &ScenarioResult) -> BalanceResult<Euros> {
    result.bank_at_end.ok_or_else(|| BalanceError::MissingSummaryField {
        scenario: result.name.clone(),
        field:    "bank_at_end",
    })
}

// ── Judgments ──────────────────────────────────────────────────

pub fn judge_difficulty(brutal: Euros, realistic: Euros, forgiving: Euros) -> ReportLine {
    if brutal < realistic && realistic < forgiving {
        ReportLine::pass("Difficulty modifiers: brutal < realistic < forgiving (net profit)")
    } else {
        ReportLine::fail(format!(
            "Difficulty modifiers: brutal={brutal}, realistic={realistic}, forgiving={forgiving}"
        ))
    }
}

pub fn judge_early_net(net: Euros) -> ReportLine {
    if net < 0.0 {
        ReportLine::warn(format!("Early game (month 5) net profit negative: {net}"))
    } else {
        ReportLine::pass(format!("Early game net positive (month 5 net {})", format_eur(net)))
    }
}

pub fn judge_family_first(bank: Euros) -> ReportLine {
    if bank >= BalanceRef::BUILDING_COST {
        ReportLine::fail(format!(
            "Family-first reached {} at month 25 (should be very hard, < 80k)",
            format_eur(bank)
        ))
    } else {
        ReportLine::pass(format!(
            "Family-first bank at month 25: {} (building not reached)",
            format_eur(bank)
        ))
    }
}

/// Family-first below the building but above the soft max is worth a note.
pub fn family_first_note(bank: Euros) -> Option<ReportLine> {
    (bank > BalanceRef::FAMILY_FIRST_MONTH_25_MAX && bank < BalanceRef::BUILDING_COST).then(|| {
        ReportLine::info(format!(
            "Family-first above the {} soft max at month 25",
            format_eur(BalanceRef::FAMILY_FIRST_MONTH_25_MAX)
        ))
    })
}

pub fn judge_grind(bank: Euros) -> ReportLine {
    if bank < BalanceRef::BUILDING_COST * BalanceRef::GRIND_BUILDING_SHARE {
        ReportLine::warn(format!(
            "Grind only {} at month 25 (target barely achievable ~80k)",
            format_eur(bank)
        ))
    } else {
        ReportLine::pass(format!("Grind bank at month 25: {}", format_eur(bank)))
    }
}

pub fn judge_sunday_burnout(burnout_month: Option<u32>) -> ReportLine {
    let (min, max) = (BalanceRef::SUNDAY_BURNOUT_MONTH_MIN, BalanceRef::SUNDAY_BURNOUT_MONTH_MAX);
    match burnout_month {
        None => ReportLine::warn(format!(
            "No burnout by month 15 with Sundays open (ref: guaranteed {min}-{max})"
        )),
        Some(month) if (min..=max).contains(&month) => {
            ReportLine::pass(format!("Sunday burnout at month {month} (within {min}-{max})"))
        }
        Some(month) => ReportLine::info(format!(
            "Sunday burnout at month {month} (ref {min}-{max}; sim stress model may differ)"
        )),
    }
}

pub fn judge_post_building(end_bank: Euros) -> ReportLine {
    if end_bank > BalanceRef::END_BANK_MAX_ACCEPTABLE {
        ReportLine::fail(format!(
            "Post-building end bank {} (target ~50k, max acceptable ~75k)",
            format_eur(end_bank)
        ))
    } else if end_bank < 0.0 {
        ReportLine::info(format!(
            "Post-building sim went negative ({}), started with €10k residual; \
             real play may have €15-25k so ends ~{}",
            format_eur(end_bank),
            format_eur(BalanceRef::END_TARGET_BANK)
        ))
    } else {
        ReportLine::pass(format!(
            "Post-building trajectory ends in range (sim end bank {})",
            format_eur(end_bank)
        ))
    }
}

// ── Checks ─────────────────────────────────────────────────────

/// Forgiving must be easier than realistic, brutal harder.
pub struct DifficultyCheck;

impl BalanceCheck for DifficultyCheck {
    fn name(&self) -> &'static str { "Difficulty modifiers" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let state = PlaythroughState {
            month:         13,
            months_played: 12,
            cheese_types:  25,
            ..Default::default()
        };
        let net = |d| calculate_monthly_financials(&state, d, 1.0).net_profit;
        Ok(vec![judge_difficulty(
            net(Difficulty::Brutal),
            net(Difficulty::Realistic),
            net(Difficulty::Forgiving),
        )])
    }
}

/// Months 1–15 should be net positive so the player can save.
pub struct EarlyMoneyCheck;

impl BalanceCheck for EarlyMoneyCheck {
    fn name(&self) -> &'static str { "Money curve early" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let state = PlaythroughState {
            month:         5,
            months_played: 4,
            cheese_types:  8,
            ..Default::default()
        };
        let f = calculate_monthly_financials(&state, Difficulty::Realistic, 1.0);
        Ok(vec![judge_early_net(f.net_profit)])
    }
}

/// Family-first must NOT reach the building cost by month 25.
pub struct FamilyFirstCheck;

impl BalanceCheck for FamilyFirstCheck {
    fn name(&self) -> &'static str { "Family-first (building very hard)" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_simulation(&PlaythroughState::default(), &family_first());
        let bank = bank_at_25(&result)?;
        let mut lines = vec![judge_family_first(bank)];
        lines.extend(family_first_note(bank));
        Ok(lines)
    }
}

/// Grinding must make the building reachable by month 25.
pub struct GrindCheck;

impl BalanceCheck for GrindCheck {
    fn name(&self) -> &'static str { "Grind (building achievable)" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_simulation(&PlaythroughState::default(), &grind());
        Ok(vec![judge_grind(bank_at_25(&result)?)])
    }
}

/// Opening Sundays should burn the player out between months 6 and 10.
pub struct SundayBurnoutCheck;

impl BalanceCheck for SundayBurnoutCheck {
    fn name(&self) -> &'static str { "Sunday burnout timing" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_simulation(&PlaythroughState::default(), &sunday_burnout());
        let mut lines = vec![judge_sunday_burnout(result.burnout_month)];
        if let (Some(peak), Some(zone)) = (result.peak_stress(), result.peak_stress_zone()) {
            lines.push(ReportLine::info(format!(
                "Sunday run peak stress {peak} ({})",
                zone.label()
            )));
        }
        Ok(lines)
    }
}

/// Balanced play should be borderline at month 25. Observational.
pub struct BalancedCheck;

impl BalanceCheck for BalancedCheck {
    fn name(&self) -> &'static str { "Balanced playthrough" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_simulation(&PlaythroughState::default(), &balanced());
        let bank = bank_at_25(&result)?;
        Ok(vec![ReportLine::info(format!("Balanced bank at month 25: {}", format_eur(bank)))])
    }
}

/// Catalog-focused play. Observational.
pub struct CheeseFocusCheck;

impl BalanceCheck for CheeseFocusCheck {
    fn name(&self) -> &'static str { "Cheese focus" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_simulation(&PlaythroughState::default(), &cheese_focus());
        let bank = bank_at_25(&result)?;
        Ok(vec![ReportLine::info(format!("Cheese-focus bank at month 25: {}", format_eur(bank)))])
    }
}

/// After the purchase, the full lifestyle should end near 50k, not 100k.
pub struct PostBuildingCheck;

impl BalanceCheck for PostBuildingCheck {
    fn name(&self) -> &'static str { "Post-building end state (~50k)" }

    fn run(&self, _config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let result = run_post_building(&post_building_seed());
        Ok(vec![judge_post_building(bank_at_end(&result)?)])
    }
}
