//! Exit status of the test process and the policy deriving it.

/// Exit status code used as a result of the test process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub(crate) const OK: Self = Self(0);
    pub(crate) const FAILED: Self = Self(101);

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Terminate the test process with this exit code.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}

/// Policy mapping the number of failed test cases onto the process exit
/// status.
///
/// The default policy treats a run with exactly one failing case as an
/// overall success. Only the exit code is affected; the reported verdict
/// still names every failure.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExitPolicy {
    /// Exit nonzero only when more than one test case failed. The default.
    FailuresAboveOne,

    /// Exit nonzero as soon as any test case failed. Selected with
    /// `--strict`.
    AnyFailure,
}

impl Default for ExitPolicy {
    fn default() -> Self {
        ExitPolicy::FailuresAboveOne
    }
}

impl ExitPolicy {
    pub(crate) fn status(self, failed: usize) -> ExitStatus {
        let failed_run = match self {
            ExitPolicy::FailuresAboveOne => failed > 1,
            ExitPolicy::AnyFailure => failed > 0,
        };
        if failed_run {
            ExitStatus::FAILED
        } else {
            ExitStatus::OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_tolerates_one_failure() {
        let policy = ExitPolicy::default();
        assert_eq!(policy.status(0), ExitStatus::OK);
        assert_eq!(policy.status(1), ExitStatus::OK);
        assert_eq!(policy.status(2), ExitStatus::FAILED);
        assert_eq!(policy.status(17), ExitStatus::FAILED);
    }

    #[test]
    fn strict_policy_fails_on_any_failure() {
        let policy = ExitPolicy::AnyFailure;
        assert_eq!(policy.status(0), ExitStatus::OK);
        assert_eq!(policy.status(1), ExitStatus::FAILED);
        assert_eq!(policy.status(2), ExitStatus::FAILED);
    }

    #[test]
    fn default_is_the_tolerant_policy() {
        assert_eq!(ExitPolicy::default(), ExitPolicy::FailuresAboveOne);
    }

    #[test]
    fn failed_status_is_nonzero() {
        assert_eq!(ExitStatus::OK.code(), 0);
        assert_ne!(ExitStatus::FAILED.code(), 0);
    }
}
