//! Play-style scenario tests against the balance reference targets.

use cheese_balance_core::{
    financials::Difficulty,
    reference::{BalanceRef, StressZone},
    scenarios::{balanced, cheese_focus, family_first, grind, post_building_seed, sunday_burnout},
    simulator::{run_post_building, run_simulation, ScenarioConfig},
    state::PlaythroughState,
};

fn run(config: &ScenarioConfig) -> cheese_balance_core::simulator::ScenarioResult {
    run_simulation(&PlaythroughState::default(), config)
}

/// Family-first must stay well short of the building by the deadline.
#[test]
fn family_first_does_not_reach_building() {
    let r = run(&family_first());
    let bank = r.bank_at_25.expect("bank recorded at month 25");
    assert!(bank < BalanceRef::BUILDING_COST, "family-first reached {bank}");
    assert_eq!(bank, 34_128.0);
    assert_eq!(r.burnout_month, None, "Sundays closed never burn out");
    // Stress only decays with Sundays closed.
    assert_eq!(&r.stress_by_month[..6], &[25, 20, 15, 10, 5, 0]);
}

/// Grinding gets within reach of the building.
#[test]
fn grind_reaches_building_share() {
    let r = run(&grind());
    let bank = r.bank_at_25.expect("bank recorded at month 25");
    assert!(
        bank >= BalanceRef::BUILDING_COST * BalanceRef::GRIND_BUILDING_SHARE,
        "grind only reached {bank}"
    );
    assert_eq!(bank, 71_755.0);
    assert!(!r.owns_building, "grind does not attempt the purchase");
}

/// Working Sundays alone ends in a burnout.
#[test]
fn sunday_run_burns_out() {
    let r = run(&sunday_burnout());
    assert_eq!(r.burnout_month, Some(12));
    assert_eq!(
        r.stress_by_month,
        vec![33, 36, 39, 42, 45, 50, 55, 60, 65, 72, 79, 40, 35, 30, 25]
    );
    assert_eq!(r.peak_stress(), Some(79));
    assert_eq!(r.peak_stress_zone(), Some(StressZone::Critical));
}

/// No burnout can fire inside its own recovery window.
#[test]
fn burnout_suppressed_during_recovery_window() {
    let r = run(&sunday_burnout());
    let fired = r.burnout_month.expect("burnout recorded") as usize;
    let window = BalanceRef::BURNOUT_RECOVERY_MONTHS as usize;
    // Month `fired` holds the reset stress; the window follows it.
    let recovery = &r.stress_by_month[fired - 1..fired - 1 + window];
    assert_eq!(recovery[0], BalanceRef::BURNOUT_RESET_STRESS);
    for pair in recovery.windows(2) {
        assert_eq!(pair[1], pair[0] - BalanceRef::STRESS_DECAY_PER_MONTH);
    }
    assert!(recovery.iter().all(|&s| s < BalanceRef::STRESS_BURNOUT_THRESHOLD));
}

/// With stress tracking off, Sundays open never move stress or burn out.
#[test]
fn stress_tracking_disabled_keeps_seed_stress() {
    let seed = PlaythroughState::default();
    let r = run(&sunday_burnout().with_stress(false));
    assert_eq!(r.stress_by_month, vec![seed.stress; 15]);
    assert_eq!(r.burnout_month, None);
    // Money is unaffected by the stress model.
    assert_eq!(r.bank_by_month, run(&sunday_burnout()).bank_by_month);
}

/// Difficulty carries through a full run in the expected order.
#[test]
fn grind_bank_follows_difficulty_order() {
    let bank = |difficulty| {
        run(&grind().with_difficulty(difficulty))
            .bank_at_25
            .expect("bank recorded at month 25")
    };
    let brutal = bank(Difficulty::Brutal);
    let realistic = bank(Difficulty::Realistic);
    let forgiving = bank(Difficulty::Forgiving);
    assert_eq!(realistic, 71_755.0);
    assert!(brutal < realistic, "brutal {brutal} vs realistic {realistic}");
    assert!(realistic < forgiving, "realistic {realistic} vs forgiving {forgiving}");
}

#[test]
fn balanced_and_cheese_focus_trajectories() {
    assert_eq!(run(&balanced()).bank_at_25, Some(55_757.0));
    assert_eq!(run(&cheese_focus()).bank_at_25, Some(71_333.0));
}

/// The full owner lifestyle must not end far above the ~50k target.
#[test]
fn post_building_end_bank_not_too_high() {
    let r = run_post_building(&post_building_seed());
    let end = r.bank_at_end.expect("end bank recorded");
    assert!(end <= BalanceRef::END_BANK_MAX_ACCEPTABLE, "post-building ended at {end}");
    assert_eq!(end, -57_865.0);
    assert_eq!(r.bank_by_month.len(), 17);
    assert_eq!(r.months_played, BalanceRef::MAX_MONTHS);
    assert!(r.owns_building);
}

/// A run that can afford the building buys it at month 25.
#[test]
fn building_purchase_at_deadline() {
    let seed = PlaythroughState { bank: 30_000.0, ..Default::default() };
    let config = grind().buying_building();
    let config = ScenarioConfig { months: 30, ..config };
    let r = run_simulation(&seed, &config);

    assert!(r.owns_building);
    assert_eq!(r.bank_at_25, Some(89_755.0));
    // History at month 25 is recorded after the purchase.
    assert_eq!(r.bank_by_month[24], 9_755.0);
    assert_eq!(r.bank_at_end, Some(16_318.0));

    let without = run_simulation(&seed, &ScenarioConfig { buy_building_at_25: false, ..config });
    assert!(!without.owns_building);
    assert_eq!(without.bank_at_end, Some(106_223.0));
}

/// Too little money at the deadline: no purchase even when attempted.
#[test]
fn building_not_bought_when_unaffordable() {
    let r = run(&grind().buying_building());
    assert!(!r.owns_building);
    assert_eq!(r.bank_at_25, Some(71_755.0));
}

/// A negative bank is tracked, never an early stop.
#[test]
fn bankruptcy_does_not_stop_the_run() {
    let seed = PlaythroughState { bank: 0.0, loan: 200_000.0, ..Default::default() };
    let r = run_simulation(&seed, &ScenarioConfig::new("broke", 20, false));
    assert_eq!(r.bank_by_month.len(), 20);
    assert!(r.bank_at_end.unwrap() < 0.0);
}
