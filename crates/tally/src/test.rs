#![allow(missing_docs)]

use crate::report::{Failure, Outcome};
use std::fmt;

/// The declaration site of a test case or an assertion check.
#[derive(Debug)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Metadata about a single test case.
#[derive(Debug)]
pub struct TestDesc {
    pub suite: &'static str,
    pub name: &'static str,
    pub location: Location,
}

/// The implementation signature of a test case.
pub type TestFn = fn(&mut Context<'_>);

/// A test case prepared for registration.
pub struct TestCase {
    pub desc: TestDesc,
    pub testfn: TestFn,
}

/// Context values valid while a test case runs.
///
/// The context identifies the executing case and is the write-back channel
/// for assertion checks. The assertion macros report each evaluated check
/// through [`Context::on_pass`] or [`Context::on_fail`]; a case with at least
/// one recorded failure is counted as failed.
pub struct Context<'a> {
    desc: &'a TestDesc,
    failures: Vec<Failure>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(desc: &'a TestDesc) -> Self {
        Self {
            desc,
            failures: vec![],
        }
    }

    /// Metadata of the test case the context belongs to.
    #[inline]
    pub fn desc(&self) -> &TestDesc {
        self.desc
    }

    /// Record a passing assertion check.
    ///
    /// Nothing is stored; the hook exists for symmetry with
    /// [`Context::on_fail`] and as the place custom assertion forms report
    /// their successes through.
    #[inline]
    pub fn on_pass(&mut self, _condition: &'static str) {}

    /// Record a failing assertion check.
    ///
    /// The failure is appended to the case record. Control is not
    /// transferred; returning from the test body early is the calling
    /// assertion's responsibility.
    pub fn on_fail(&mut self, location: &'static Location, condition: &'static str) {
        self.failures.push(Failure {
            location,
            condition,
        });
    }

    pub(crate) fn into_outcome(self) -> Outcome {
        if self.failures.is_empty() {
            Outcome::Passed
        } else {
            Outcome::Failed {
                failures: self.failures,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DESC: TestDesc = TestDesc {
        suite: "Alpha",
        name: "Test1",
        location: Location {
            file: "alpha.rs",
            line: 10,
            column: 1,
        },
    };

    static CHECK_LOCATION: Location = Location {
        file: "alpha.rs",
        line: 12,
        column: 5,
    };

    #[test]
    fn passing_checks_leave_no_record() {
        let mut ctx = Context::new(&DESC);
        ctx.on_pass("1 == 1");
        ctx.on_pass("2 == 2");
        match ctx.into_outcome() {
            Outcome::Passed => (),
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[test]
    fn failing_check_is_recorded_with_its_condition() {
        let mut ctx = Context::new(&DESC);
        ctx.on_fail(&CHECK_LOCATION, "1 == 2");
        match ctx.into_outcome() {
            Outcome::Failed { failures } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].condition, "1 == 2");
                assert_eq!(failures[0].location.line, 12);
            }
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[test]
    fn repeated_failures_accumulate_on_one_case() {
        let mut ctx = Context::new(&DESC);
        ctx.on_fail(&CHECK_LOCATION, "a == b");
        ctx.on_fail(&CHECK_LOCATION, "b == c");
        match ctx.into_outcome() {
            Outcome::Failed { failures } => assert_eq!(failures.len(), 2),
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[test]
    fn desc_is_visible_to_the_case_body() {
        let ctx = Context::new(&DESC);
        assert_eq!(ctx.desc().suite, "Alpha");
        assert_eq!(ctx.desc().name, "Test1");
    }
}
