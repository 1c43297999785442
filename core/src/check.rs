//! Check trait.
//!
//! RULE: Every balance check implements BalanceCheck.
//! The suite calls run() on each registered check in registration
//! order. Execution order is fixed and documented in suite.rs.

use crate::{config::HarnessConfig, error::BalanceResult, report::ReportLine};

/// The contract every check must fulfill.
pub trait BalanceCheck {
    /// Title printed in the report heading.
    fn name(&self) -> &'static str;

    /// Run the check and return its report lines.
    ///
    /// PASS/FAIL/WARN/INFO are returned as lines, not errors. An `Err`
    /// means the check could not be evaluated at all.
    fn run(&self, config: &HarnessConfig) -> BalanceResult<Vec<ReportLine>>;
}
