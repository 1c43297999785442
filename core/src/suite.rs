//! The balance suite — runs every check and collects the report.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Constants (index.html)
//!   2. Mandatory events (events.js)
//!   3. Difficulty modifiers
//!   4. Money curve early
//!   5. Family-first
//!   6. Grind
//!   7. Sunday burnout timing
//!   8. Balanced playthrough
//!   9. Cheese focus
//!  10. Post-building end state
//!
//! RULES:
//!   - A check that errors or panics becomes an ERROR line followed by
//!     its trace (error chain or panic location, plus a stack
//!     backtrace); the remaining checks still run.
//!   - A missing artifact aborts the run: without the game's files
//!     there is nothing meaningful to validate.

use crate::{
    check::BalanceCheck,
    config::HarnessConfig,
    content::{ConstantsCheck, MandatoryEventsCheck},
    error::BalanceResult,
    report::{Outcome, Report, ReportLine},
    scenarios::{
        BalancedCheck, CheeseFocusCheck, DifficultyCheck, EarlyMoneyCheck, FamilyFirstCheck,
        GrindCheck, PostBuildingCheck, SundayBurnoutCheck,
    },
};
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    /// Trace of the last panic raised on this thread while a check ran.
    static PANIC_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub const SUITE_TITLE: &str = "CHEZ JULIEN — BALANCE TEST SUITE (vs BALANCE_REFERENCE.md)";

pub struct BalanceSuite {
    config: HarnessConfig,
    checks: Vec<Box<dyn BalanceCheck>>,
}

impl BalanceSuite {
    /// An empty suite. Use `build()` for the full, ordered check list.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config, checks: Vec::new() }
    }

    /// Build a suite with every check registered in the documented order.
    pub fn build(config: HarnessConfig) -> Self {
        let mut suite = BalanceSuite::new(config);
        // Static content first: if the game files are gone, stop early.
        suite.register(Box::new(ConstantsCheck));
        suite.register(Box::new(MandatoryEventsCheck));
        // Formula checks.
        suite.register(Box::new(DifficultyCheck));
        suite.register(Box::new(EarlyMoneyCheck));
        // Play-style scenarios.
        suite.register(Box::new(FamilyFirstCheck));
        suite.register(Box::new(GrindCheck));
        suite.register(Box::new(SundayBurnoutCheck));
        suite.register(Box::new(BalancedCheck));
        suite.register(Box::new(CheeseFocusCheck));
        suite.register(Box::new(PostBuildingCheck));
        suite
    }

    /// Register a check. Call in the documented execution order.
    pub fn register(&mut self, check: Box<dyn BalanceCheck>) {
        self.checks.push(check);
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every check in order and assemble the report.
    pub fn run(&self) -> BalanceResult<Report> {
        let mut report = Report::new();
        report.push(ReportLine::Rule);
        report.push(ReportLine::text(SUITE_TITLE));
        report.push(ReportLine::Rule);

        // Panics inside checks are reported, not printed to stderr.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|l| format!("panicked at {l}"))
                .unwrap_or_else(|| "panicked at an unknown location".to_string());
            let trace = format!("{location}\n{}", Backtrace::force_capture());
            PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
        }));

        let outcome = self.run_checks(&mut report);
        panic::set_hook(previous_hook);
        outcome?;

        report.push(ReportLine::Blank);
        report.push(ReportLine::Rule);
        Ok(report)
    }

    fn run_checks(&self, report: &mut Report) -> BalanceResult<()> {
        for check in &self.checks {
            report.push(ReportLine::Blank);
            report.push(ReportLine::heading(check.name()));
            log::info!("running check '{}'", check.name());

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(&self.config)));
            match outcome {
                Ok(Ok(lines)) => {
                    for line in &lines {
                        if let ReportLine::Outcome { kind: Outcome::Fail | Outcome::Warn, message } = line {
                            log::warn!("{}: {message}", check.name());
                        }
                    }
                    report.extend(lines);
                }
                Ok(Err(e)) if e.is_fatal() => return Err(e),
                Ok(Err(e)) => {
                    log::warn!("check '{}' errored: {e}", check.name());
                    let backtrace = Backtrace::force_capture();
                    let err = anyhow::Error::new(e);
                    report.push(ReportLine::error(err.to_string()));
                    report.push(ReportLine::text(format!("{err:?}\n\nStack backtrace:\n{backtrace}")));
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    log::warn!("check '{}' panicked: {message}", check.name());
                    report.push(ReportLine::error(message));
                    let trace = PANIC_TRACE.with(|slot| slot.borrow_mut().take());
                    if let Some(trace) = trace {
                        report.push(ReportLine::text(trace));
                    }
                }
            }
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}
