//! The sequential test runner.

use crate::{
    registry::Registry,
    report::{Outcome, Reporter, SuiteSummary, Summary, TestCaseSummary},
    session::Session,
    test::{Context, TestCase},
};
use maybe_unwind::maybe_unwind;
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Once,
};

/// The test cases a harness binary hands to the runner.
pub type TestCases<'a> = &'a [&'static TestCase];

/// Entry point used by the `main` function that `test_harness!` generates.
///
/// Parses the command line, runs every registered test case and terminates
/// the process with the aggregated exit status.
pub fn test_runner(cases: TestCases<'_>) -> ! {
    let session = match Session::from_env() {
        Ok(session) => session,
        Err(status) => status.exit(),
    };
    session.run(cases).exit()
}

fn install_globals() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !maybe_unwind::capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}

/// Run every case in the registry and report progress to the reporter.
///
/// Suites run strictly in registration order, and the cases within each
/// suite likewise. A panicking case is contained and counted as failed; the
/// cases after it still run.
pub fn run_all(registry: &Registry, reporter: &dyn Reporter) -> Summary {
    install_globals();

    reporter.test_run_starting(registry);

    let mut summary = Summary::empty();
    for suite in registry.suites() {
        reporter.test_suite_starting(suite);

        let mut suite_summary = SuiteSummary::new(suite.name());
        for &case in suite.cases() {
            reporter.test_case_starting(&case.desc);
            let result = run_case(case);
            reporter.test_case_ended(&result);
            suite_summary.append(result);
        }

        reporter.test_suite_ended(&suite_summary);
        summary.append(suite_summary);
    }

    reporter.test_run_ended(&summary);
    summary
}

fn run_case(case: &'static TestCase) -> TestCaseSummary {
    let mut ctx = Context::new(&case.desc);
    let outcome = match maybe_unwind(AssertUnwindSafe(|| (case.testfn)(&mut ctx))) {
        Ok(()) => ctx.into_outcome(),
        Err(unwind) => Outcome::Panicked(unwind),
    };
    TestCaseSummary {
        desc: &case.desc,
        outcome,
    }
}
