use crate::{
    registry::{Registry, Suite},
    report::{Outcome, Reporter, SuiteSummary, Summary, TestCaseSummary},
    test::TestDesc,
};

/// Reports progress and results of a test run through the `log` facade.
///
/// Useful when the harness is embedded in a program that owns the terminal;
/// whatever logger the host installed decides what becomes visible.
#[derive(Debug, Default)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    /// Create a log reporter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, registry: &Registry) {
        log::info!(
            "running {} tests across {} suites",
            registry.case_count(),
            registry.suite_count()
        );
    }

    fn test_run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test result: ok; {} passed", summary.total_passed());
        } else {
            log::error!(
                "test result: FAILED; {} passed; {} failed",
                summary.total_passed(),
                summary.total_failed()
            );
        }
    }

    fn test_suite_starting(&self, suite: &Suite) {
        log::info!("suite {} ({} test cases)", suite.name(), suite.case_count());
    }

    fn test_suite_ended(&self, summary: &SuiteSummary) {
        log::info!(
            "suite {}: {} run; {} passed; {} failed",
            summary.name(),
            summary.run_count(),
            summary.passed_count(),
            summary.failed_count()
        );
    }

    fn test_case_starting(&self, desc: &TestDesc) {
        log::trace!("test {}::{} starting", desc.suite, desc.name);
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        match summary.outcome {
            Outcome::Passed => log::info!("test {}::{} ... ok", summary.desc.suite, summary.desc.name),
            Outcome::Failed { ref failures } => {
                for failure in failures {
                    log::error!(
                        "{} assertion failed: {}",
                        failure.location(),
                        failure.condition()
                    );
                }
                log::error!("test {}::{} ... FAILED", summary.desc.suite, summary.desc.name);
            }
            Outcome::Panicked(ref unwind) => {
                log::error!("{}", unwind);
                log::error!("test {}::{} ... FAILED", summary.desc.suite, summary.desc.name);
            }
        }
    }
}
