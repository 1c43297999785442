//! Shared primitive types used across the entire harness.

/// A simulated month. 1-based; month 1 is the first month of a playthrough.
pub type Month = u32;

/// A currency amount in euros. Signed: the bank may go negative.
pub type Euros = f64;

/// A 0–100 scale stat (stress, energy, reputation, autonomy, family).
pub type Stat = i32;
