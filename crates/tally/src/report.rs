#![allow(missing_docs)]

use crate::{
    exit_status::{ExitPolicy, ExitStatus},
    registry::{Registry, Suite},
    test::{Location, TestDesc},
};
use maybe_unwind::Unwind;

/// A single failing assertion check recorded by a test case.
#[derive(Debug)]
pub struct Failure {
    pub(crate) location: &'static Location,
    pub(crate) condition: &'static str,
}

impl Failure {
    /// Location of the failing check.
    pub fn location(&self) -> &'static Location {
        self.location
    }

    /// Source text of the condition that evaluated to false.
    pub fn condition(&self) -> &'static str {
        self.condition
    }
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Passed,
    Failed { failures: Vec<Failure> },
    Panicked(Unwind),
}

/// The result of running a single test case.
#[derive(Debug)]
pub struct TestCaseSummary {
    pub(crate) desc: &'static TestDesc,
    pub(crate) outcome: Outcome,
}

impl TestCaseSummary {
    /// Metadata of the executed test case.
    pub fn desc(&self) -> &'static TestDesc {
        self.desc
    }

    /// Whether the case completed without failed checks or a panic.
    pub fn is_passed(&self) -> bool {
        match self.outcome {
            Outcome::Passed => true,
            Outcome::Failed { .. } | Outcome::Panicked(..) => false,
        }
    }
}

/// Aggregated results of one suite.
#[derive(Debug)]
pub struct SuiteSummary {
    pub(crate) name: &'static str,
    pub(crate) passed: Vec<TestCaseSummary>,
    pub(crate) failed: Vec<TestCaseSummary>,
}

impl SuiteSummary {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            passed: vec![],
            failed: vec![],
        }
    }

    /// Name of the suite.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Number of cases that ran in this suite.
    pub fn run_count(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Number of passed cases.
    pub fn passed_count(&self) -> usize {
        self.passed.len()
    }

    /// Number of failed cases.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub(crate) fn append(&mut self, result: TestCaseSummary) {
        if result.is_passed() {
            self.passed.push(result);
        } else {
            self.failed.push(result);
        }
    }
}

/// Aggregated results of a whole run.
#[derive(Debug, Default)]
pub struct Summary {
    pub(crate) suites: Vec<SuiteSummary>,
}

impl Summary {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, suite: SuiteSummary) {
        self.suites.push(suite);
    }

    pub(crate) fn failed_cases(&self) -> impl Iterator<Item = &TestCaseSummary> {
        self.suites.iter().flat_map(|suite| suite.failed.iter())
    }

    /// Per-suite results, in run order.
    pub fn suites(&self) -> &[SuiteSummary] {
        &self.suites
    }

    /// Number of suites that ran.
    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Total number of cases that ran.
    pub fn total_run(&self) -> usize {
        self.suites.iter().map(SuiteSummary::run_count).sum()
    }

    /// Total number of passed cases.
    pub fn total_passed(&self) -> usize {
        self.suites.iter().map(SuiteSummary::passed_count).sum()
    }

    /// Total number of failed cases.
    pub fn total_failed(&self) -> usize {
        self.suites.iter().map(SuiteSummary::failed_count).sum()
    }

    /// Whether no case in the run failed.
    pub fn is_passed(&self) -> bool {
        self.total_failed() == 0
    }

    /// Map the aggregated failed-case count onto a process exit status under
    /// the given policy.
    pub fn status(&self, policy: ExitPolicy) -> ExitStatus {
        policy.status(self.total_failed())
    }
}

/// The handler of events raised while running test cases.
pub trait Reporter {
    fn test_run_starting(&self, registry: &Registry);
    fn test_run_ended(&self, summary: &Summary);

    fn test_suite_starting(&self, suite: &Suite);
    fn test_suite_ended(&self, summary: &SuiteSummary);

    fn test_case_starting(&self, desc: &TestDesc);
    fn test_case_ended(&self, summary: &TestCaseSummary);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, registry: &Registry) {
            (**self).test_run_starting(registry)
        }

        fn test_run_ended(&self, summary: &Summary) {
            (**self).test_run_ended(summary)
        }

        fn test_suite_starting(&self, suite: &Suite) {
            (**self).test_suite_starting(suite)
        }

        fn test_suite_ended(&self, summary: &SuiteSummary) {
            (**self).test_suite_ended(summary)
        }

        fn test_case_starting(&self, desc: &TestDesc) {
            (**self).test_case_starting(desc)
        }

        fn test_case_ended(&self, summary: &TestCaseSummary) {
            (**self).test_case_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Location;

    static DESC: TestDesc = TestDesc {
        suite: "Alpha",
        name: "Test1",
        location: Location {
            file: "alpha.rs",
            line: 1,
            column: 1,
        },
    };

    static CHECK_LOCATION: Location = Location {
        file: "alpha.rs",
        line: 3,
        column: 5,
    };

    fn passed() -> TestCaseSummary {
        TestCaseSummary {
            desc: &DESC,
            outcome: Outcome::Passed,
        }
    }

    fn failed() -> TestCaseSummary {
        TestCaseSummary {
            desc: &DESC,
            outcome: Outcome::Failed {
                failures: vec![Failure {
                    location: &CHECK_LOCATION,
                    condition: "1 == 2",
                }],
            },
        }
    }

    #[test]
    fn suite_summary_splits_by_result() {
        let mut summary = SuiteSummary::new("Alpha");
        summary.append(passed());
        summary.append(failed());
        summary.append(passed());

        assert_eq!(summary.run_count(), 3);
        assert_eq!(summary.passed_count(), 2);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.failed[0].desc().name, "Test1");
        assert!(!summary.failed[0].is_passed());
    }

    #[test]
    fn totals_are_sums_over_suites() {
        let mut alpha = SuiteSummary::new("Alpha");
        alpha.append(passed());
        alpha.append(passed());

        let mut beta = SuiteSummary::new("Beta");
        beta.append(failed());

        let mut summary = Summary::empty();
        summary.append(alpha);
        summary.append(beta);

        assert_eq!(summary.suite_count(), 2);
        assert_eq!(summary.total_run(), 3);
        assert_eq!(summary.total_passed(), 2);
        assert_eq!(summary.total_failed(), 1);
        assert_eq!(summary.total_run(), summary.total_passed() + summary.total_failed());
        assert!(!summary.is_passed());
    }

    #[test]
    fn empty_run_counts_as_passed() {
        let summary = Summary::empty();
        assert_eq!(summary.total_run(), 0);
        assert!(summary.is_passed());
    }

    #[test]
    fn failed_cases_iterates_in_suite_order() {
        let mut alpha = SuiteSummary::new("Alpha");
        alpha.append(failed());

        let mut beta = SuiteSummary::new("Beta");
        beta.append(failed());
        beta.append(passed());

        let mut summary = Summary::empty();
        summary.append(alpha);
        summary.append(beta);

        assert_eq!(summary.failed_cases().count(), 2);
    }
}
