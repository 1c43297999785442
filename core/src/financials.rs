//! Monthly financials — mirrors the game's calculateMonthlyFinancials().
//!
//! The order of operations below is part of the contract. Sales are
//! built additively and multiplicatively in a fixed sequence; changing
//! the sequence changes the rounded results the tuning targets rely on.

use crate::{
    error::{BalanceError, BalanceResult},
    reference::BalanceRef,
    state::PlaythroughState,
    types::{Euros, Month},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Seasonal sales factor by calendar month, January first.
/// Slow summer, holiday peak in December.
pub const SEASONAL_MODIFIERS: [f64; 12] = [
    0.85, 0.88, 0.92, 0.95, 0.98, 1.00, // Jan–Jun
    0.82, 0.75, 0.92, 1.00, 1.10, 1.35, // Jul–Dec
];

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Realistic,
    Forgiving,
    Brutal,
}

impl Difficulty {
    pub fn sales_modifier(&self) -> f64 {
        match self {
            Self::Realistic => 1.0,
            Self::Forgiving => 1.12,
            Self::Brutal    => 0.88,
        }
    }

    pub fn cost_modifier(&self) -> f64 {
        match self {
            Self::Realistic => 1.0,
            Self::Forgiving => 0.92,
            Self::Brutal    => 1.08,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Forgiving => "forgiving",
            Self::Brutal    => "brutal",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = BalanceError;

    fn from_str(s: &str) -> BalanceResult<Self> {
        match s {
            "realistic" => Ok(Self::Realistic),
            "forgiving" => Ok(Self::Forgiving),
            "brutal"    => Ok(Self::Brutal),
            other       => Err(BalanceError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// One month's result, rounded to whole euros.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFinancials {
    /// Net profit after the retention factor (losses are never taxed).
    pub net_profit: Euros,
    /// Gross monthly sales.
    pub sales: Euros,
}

/// Round to the nearest whole euro, ties to even.
/// This is the rounding rule the reference figures were produced with.
pub fn round_euros(amount: Euros) -> Euros {
    amount.round_ties_even()
}

pub fn seasonal_modifier(month: Month) -> f64 {
    let index = (month as i64 - 1).rem_euclid(12) as usize;
    SEASONAL_MODIFIERS[index]
}

/// Sales bonus from catalog breadth. Three bands (≤20, 21–50, >50),
/// each stacking on the cumulative bonus of the band below.
pub fn cheese_bonus(cheese_types: u32) -> Euros {
    let n = cheese_types as f64;
    if cheese_types <= 20 {
        n * 100.0
    } else if cheese_types <= 50 {
        2_000.0 + (n - 20.0) * 120.0
    } else {
        2_000.0 + 3_600.0 + (n - 50.0) * 60.0
    }
}

/// Gross margin percentage, capped at 45.
pub fn margin_percent(state: &PlaythroughState) -> f64 {
    let mut margin = 30.0 + (state.cheese_types as f64 * 0.10).min(10.0);
    margin += ((state.reputation - 50) as f64 * 0.08).max(0.0);
    margin += ((state.autonomy - 40) as f64 * 0.04).max(0.0);
    if state.has_charcuterie {
        margin += 1.0;
    }
    if state.has_wine_selection {
        margin += 2.0;
    }
    margin.min(45.0)
}

/// Fixed monthly costs before the difficulty cost modifier.
pub fn fixed_costs(state: &PlaythroughState) -> Euros {
    // Rent, utilities, insurance/accounting.
    let mut costs = BalanceRef::MONTHLY_RENT + 400.0 + 200.0;

    if state.salary_started {
        let months_since = state.months_since_building as f64;
        // Owner salary.
        costs += 2_800.0 + (months_since * 60.0).min(1_000.0);
        if state.has_car {
            costs += 450.0;
        }
        if state.has_apartment {
            costs += 1_400.0;
        }
        // Lifestyle creep.
        costs += (months_since * 60.0).min(1_000.0);
        // Business reinvestment.
        costs += 200.0 + (months_since * 30.0).min(500.0);
        // Social obligations.
        if state.months_since_building >= 6 {
            costs += 300.0;
        }
    } else {
        costs += 1_200.0;
    }

    if state.has_lucas {
        costs += 1_400.0;
    }
    if state.has_henry {
        costs += 1_800.0;
    }
    costs += state.monthly_payment;
    costs += state.monthly_insurance;
    if state.cheese_types > 50 {
        costs += 150.0;
    }
    if state.cheese_types > 80 {
        costs += 200.0;
    }

    // Owning swaps rent for the building loan.
    if state.owns_building {
        costs -= BalanceRef::MONTHLY_RENT;
        costs += BalanceRef::BUILDING_LOAN_PAYMENT;
    }
    costs
}

/// Gross sales for the month, before rounding.
pub fn monthly_sales(state: &PlaythroughState, difficulty: Difficulty, variance: f64) -> Euros {
    let mut sales = BalanceRef::BASE_MONTHLY_SALES + cheese_bonus(state.cheese_types);

    sales *= 0.75 + state.reputation as f64 * 0.005;
    sales *= 0.90 + state.autonomy as f64 * 0.002;

    if state.energy < 60 {
        sales *= 1.0 - (60 - state.energy) as f64 * 0.002;
    }

    if state.has_charcuterie {
        sales += 800.0;
    }
    if state.has_wine_selection {
        sales *= 1.04;
    }
    if state.has_corporate_client {
        sales += 1_200.0;
    }
    if state.has_wine_events {
        sales += 600.0;
    }
    if state.extended_hours {
        sales += 800.0;
    }
    if state.owns_building {
        sales *= 1.03;
    }

    sales *= difficulty.sales_modifier();
    sales *= seasonal_modifier(state.month);
    if state.open_sunday {
        sales += 1_000.0;
    }
    sales * variance
}

/// Compute one month's net profit and gross sales.
///
/// Pure: identical inputs always give bit-identical outputs.
/// `variance` is the random-variance multiplier (1.0 = average month).
pub fn calculate_monthly_financials(
    state: &PlaythroughState,
    difficulty: Difficulty,
    variance: f64,
) -> MonthlyFinancials {
    let sales = monthly_sales(state, difficulty, variance);
    let margin = margin_percent(state);
    let fixed = fixed_costs(state) * difficulty.cost_modifier();

    let cogs = sales * (1.0 - margin / 100.0);
    let mut expenses = cogs + fixed;
    if state.loan > 0.0 {
        expenses += state.loan * BalanceRef::LOAN_INTEREST_RATE;
    }

    let mut net = sales - expenses;
    if net > 0.0 {
        net *= BalanceRef::AFTER_TAX_RETENTION;
    }

    MonthlyFinancials {
        net_profit: round_euros(net),
        sales:      round_euros(sales),
    }
}
