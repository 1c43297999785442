//! Monthly stress tick.
//!
//! Accumulation minus recovery, applied to the current stress level.
//! The burnout transition itself belongs to the simulator; this module
//! only computes the next stress value.

use crate::{state::PlaythroughState, types::Stat};

/// Extra accumulation from working Sundays, by months played.
fn sunday_load(months_played: u32) -> Stat {
    match months_played {
        0..=4  => 1,
        5..=8  => 3,
        9..=14 => 5,
        _      => 3,
    }
}

/// Stress accumulated this month, before recovery.
pub fn stress_accumulation(state: &PlaythroughState) -> Stat {
    let mut base: Stat = 3;

    if state.open_sunday {
        base += sunday_load(state.months_played);
        if state.has_henry {
            base -= 3;
        } else if state.has_lucas {
            base -= 1;
        }
    }
    // Running the shop alone.
    if !state.has_helper() {
        base += 2;
    }
    if state.loan > 0.0 && state.months_played > 6 {
        base += 1;
    }
    if state.bank < 5_000.0 && state.months_played > 4 {
        base += 2;
    }
    if state.has_dog {
        base -= 2;
    }
    // Henry's relief counts again here on top of the Sunday relief above.
    if state.has_henry {
        base -= 2;
    }
    base
}

/// Stress recovered this month.
pub fn stress_recovery(state: &PlaythroughState) -> Stat {
    let mut recovery = if state.open_sunday { 3 } else { 5 };
    if state.autonomy >= 50 {
        recovery += 1;
    }
    if state.autonomy >= 70 {
        recovery += 1;
    }
    recovery
}

/// Next month's stress, clamped to [0, 100].
pub fn simulate_stress_tick(state: &PlaythroughState) -> Stat {
    let delta = stress_accumulation(state) - stress_recovery(state);
    (state.stress + delta).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_alone_accumulates() {
        let state = PlaythroughState { open_sunday: true, months_played: 0, ..Default::default() };
        // 3 base + 1 sunday + 2 alone - 3 recovery
        assert_eq!(simulate_stress_tick(&state), 33);
    }

    #[test]
    fn sunday_load_buckets() {
        assert_eq!(sunday_load(4), 1);
        assert_eq!(sunday_load(5), 3);
        assert_eq!(sunday_load(8), 3);
        assert_eq!(sunday_load(9), 5);
        assert_eq!(sunday_load(14), 5);
        assert_eq!(sunday_load(15), 3);
    }

    #[test]
    fn closed_sunday_recovers() {
        let state = PlaythroughState::default();
        // 3 base + 2 alone - 5 recovery
        assert_eq!(simulate_stress_tick(&state), 30);

        let calm = PlaythroughState { has_dog: true, autonomy: 70, ..Default::default() };
        // 3 + 2 - 2 dog - 7 recovery
        assert_eq!(simulate_stress_tick(&calm), 26);
    }

    #[test]
    fn henry_relief_is_counted_twice() {
        let state = PlaythroughState {
            open_sunday: true,
            months_played: 10,
            has_henry: true,
            has_lucas: true,
            ..Default::default()
        };
        // 3 + 5 sunday - 3 henry (sunday) - 2 henry (again) = 3
        assert_eq!(stress_accumulation(&state), 3);
    }

    #[test]
    fn stress_is_clamped() {
        let high = PlaythroughState { stress: 99, open_sunday: true, months_played: 10, bank: 0.0, ..Default::default() };
        assert_eq!(simulate_stress_tick(&high), 100);

        let low = PlaythroughState { stress: 1, has_dog: true, has_henry: true, autonomy: 80, ..Default::default() };
        assert_eq!(simulate_stress_tick(&low), 0);
    }
}
