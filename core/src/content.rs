//! Static-content checks against the game's source artifacts.
//!
//! These read the files verbatim and look for literal declarations.
//! Nothing is parsed or executed. A missing artifact aborts the run;
//! a missing declaration is a report line.

use crate::{
    check::BalanceCheck,
    config::{HarnessConfig, EVENTS_FILE, INDEX_FILE},
    error::{BalanceError, BalanceResult},
    reference::BalanceRef,
    report::ReportLine,
};
use std::path::Path;

/// Events every build of the game must ship.
pub const MANDATORY_EVENTS: &[&str] = &[
    "sunday_opening",
    "first_christmas",
    "adopt_dog",
    "building_offer",
    "christmas_market",
    "building_deadline",
    "building_deadline_extended",
    "meet_lucas",
    "christmas_rush",
    "christmas_day",
];

pub fn load_artifact(path: &Path) -> BalanceResult<String> {
    std::fs::read_to_string(path).map_err(|source| BalanceError::MissingArtifact {
        path: path.to_path_buf(),
        source,
    })
}

/// Constant declarations in the game markup that disagree with the reference.
pub fn constant_mismatches(index: &str) -> Vec<String> {
    let mut mismatches = Vec::new();

    let building_cost = format!("{}", BalanceRef::BUILDING_COST as i64);
    if !index.contains(&building_cost) && index.contains("buildingCost:") {
        mismatches.push(format!("buildingCost is not {building_cost} in {INDEX_FILE}"));
    }

    let deadline = format!("buildingDeadlineMonth: {}", BalanceRef::BUILDING_DEADLINE_MONTH);
    if !index.contains(&deadline) {
        mismatches.push(format!(
            "buildingDeadlineMonth is not {} in {INDEX_FILE}",
            BalanceRef::BUILDING_DEADLINE_MONTH
        ));
    }

    let bank_high = format!("bank: {}", BalanceRef::START_BANK_HIGH as i64);
    let bank_low = format!("bank: {}", BalanceRef::START_BANK_LOW as i64);
    if !index.contains(&bank_high) && !index.contains(&bank_low) {
        mismatches.push(format!(
            "Initial bank should be {} or {} in {INDEX_FILE}",
            BalanceRef::START_BANK_HIGH as i64,
            BalanceRef::START_BANK_LOW as i64
        ));
    }

    let burnout = format!("stress >= {}", BalanceRef::STRESS_BURNOUT_THRESHOLD);
    if !index.contains(&burnout) {
        mismatches.push(format!(
            "Burnout threshold should be {}% in {INDEX_FILE}",
            BalanceRef::STRESS_BURNOUT_THRESHOLD
        ));
    }

    let min_month = BalanceRef::BURNOUT_MIN_MONTHS_PLAYED;
    let honeymoon = format!("monthsPlayed >= {min_month}");
    let honeymoon_prose = format!("month {min_month}");
    if !index.contains(&honeymoon) && !index.to_lowercase().contains(&honeymoon_prose) {
        mismatches.push(format!("Burnout should be possible from month {min_month} in {INDEX_FILE}"));
    }

    mismatches
}

pub fn check_constants(index: &str) -> Vec<ReportLine> {
    let mismatches = constant_mismatches(index);
    if mismatches.is_empty() {
        return vec![ReportLine::text(format!("Constants check ({INDEX_FILE}): OK"))];
    }
    log::warn!("{} constant mismatches in {INDEX_FILE}", mismatches.len());
    let mut lines = vec![ReportLine::text(format!("Constants check ({INDEX_FILE}):"))];
    lines.extend(mismatches.into_iter().map(ReportLine::warn));
    lines
}

/// Mandatory event ids with no `id: '<name>'` declaration.
pub fn missing_events(events: &str) -> Vec<&'static str> {
    MANDATORY_EVENTS
        .iter()
        .copied()
        .filter(|id| !events.contains(&format!("id: '{id}'")))
        .collect()
}

pub fn check_mandatory_events(events: &str) -> Vec<ReportLine> {
    let missing = missing_events(events);
    if missing.is_empty() {
        return vec![ReportLine::pass(format!(
            "All {} mandatory events present in {EVENTS_FILE}",
            MANDATORY_EVENTS.len()
        ))];
    }
    vec![ReportLine::fail(format!("Missing mandatory events: {}", missing.join(", ")))]
}

pub struct ConstantsCheck;

impl BalanceCheck for ConstantsCheck {
    fn name(&self) -> &'static str { "Constants (index.html)" }

    fn run(&self, config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let index = load_artifact(&config.index_path)?;
        Ok(check_constants(&index))
    }
}

pub struct MandatoryEventsCheck;

impl BalanceCheck for MandatoryEventsCheck {
    fn name(&self) -> &'static str { "Mandatory events (events.js)" }

    fn run(&self, config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>> {
        let events = load_artifact(&config.events_path)?;
        Ok(check_mandatory_events(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    const GOOD_INDEX: &str = r#"
        const CONFIG = { buildingCost: 80000, buildingDeadlineMonth: 25 };
        let state = { bank: 12000, stress: 30 };
        if (state.stress >= 80 && state.monthsPlayed >= 6) { triggerBurnout(); }
    "#;

    fn all_events() -> String {
        MANDATORY_EVENTS
            .iter()
            .map(|id| format!("{{ id: '{id}', title: 'x' }},\n"))
            .collect()
    }

    #[test]
    fn good_index_has_no_mismatches() {
        assert!(constant_mismatches(GOOD_INDEX).is_empty());
        let lines = check_constants(GOOD_INDEX);
        assert_eq!(lines, vec![ReportLine::text("Constants check (index.html): OK")]);
    }

    #[test]
    fn wrong_building_cost_is_reported() {
        let index = GOOD_INDEX.replace("80000", "95000");
        let mismatches = constant_mismatches(&index);
        assert_eq!(mismatches, vec!["buildingCost is not 80000 in index.html".to_string()]);
    }

    #[test]
    fn honeymoon_may_be_stated_in_prose() {
        let index = GOOD_INDEX.replace("state.monthsPlayed >= 6", "true /* Month 6 onwards */");
        assert!(constant_mismatches(&index).is_empty());
    }

    #[test]
    fn zero_start_bank_is_accepted() {
        let index = GOOD_INDEX.replace("bank: 12000", "bank: 0");
        assert!(constant_mismatches(&index).is_empty());
    }

    #[test]
    fn constant_mismatches_warn_without_failing() {
        let lines = check_constants("nothing relevant here");
        assert_eq!(lines[0], ReportLine::text("Constants check (index.html):"));
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.outcome() != Some(Outcome::Fail)));
    }

    #[test]
    fn all_mandatory_events_present() {
        let lines = check_mandatory_events(&all_events());
        assert_eq!(lines, vec![ReportLine::pass("All 10 mandatory events present in data/events.js")]);
    }

    #[test]
    fn missing_events_are_named() {
        let events = all_events().replace("id: 'adopt_dog'", "id: 'adopt_cat'");
        assert_eq!(missing_events(&events), vec!["adopt_dog"]);
        let lines = check_mandatory_events(&events);
        assert_eq!(lines, vec![ReportLine::fail("Missing mandatory events: adopt_dog")]);
    }

    #[test]
    fn several_missing_events_are_listed_in_catalog_order() {
        let events = all_events()
            .replace("id: 'meet_lucas'", "id: 'meet_someone'")
            .replace("id: 'first_christmas'", "id: 'christmas'");
        let lines = check_mandatory_events(&events);
        assert_eq!(
            lines,
            vec![ReportLine::fail("Missing mandatory events: first_christmas, meet_lucas")]
        );
    }

    #[test]
    fn extended_deadline_does_not_satisfy_plain_deadline() {
        let events = all_events().replace("id: 'building_deadline',", "id: 'deadline',");
        assert_eq!(missing_events(&events), vec!["building_deadline"]);
    }
}
