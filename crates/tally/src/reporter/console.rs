use crate::{
    registry::{Registry, Suite},
    report::{Outcome, Reporter, SuiteSummary, Summary, TestCaseSummary},
    test::TestDesc,
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, StandardStreamLock, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec.get_or_insert_with(ColorSpec::new).set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn plural_suffix(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

/// Reports progress and results of a test run on the console.
pub struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    /// Create a console reporter writing to standard output.
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    fn print_suite_heading(&self, w: &mut StandardStreamLock<'_>, suite: &Suite) -> io::Result<()> {
        write!(w, "suite ")?;
        colored(suite.name()).fg(Color::Cyan).fmt_colored(w)?;
        writeln!(
            w,
            " ({} test case{})",
            suite.case_count(),
            plural_suffix(suite.case_count())
        )?;
        Ok(())
    }

    fn print_case_summary(
        &self,
        w: &mut StandardStreamLock<'_>,
        summary: &TestCaseSummary,
    ) -> io::Result<()> {
        let status = match summary.outcome {
            Outcome::Passed => colored("ok").fg(Color::Green),
            Outcome::Failed { .. } | Outcome::Panicked(..) => colored("FAILED").fg(Color::Red),
        };
        write!(w, "test {}::{} ... ", summary.desc.suite, summary.desc.name)?;
        status.fmt_colored(w)?;
        writeln!(w)?;
        Ok(())
    }

    fn print_suite_summary(
        &self,
        w: &mut StandardStreamLock<'_>,
        summary: &SuiteSummary,
    ) -> io::Result<()> {
        writeln!(
            w,
            "suite {}: {} run; {} passed; {} failed",
            summary.name(),
            summary.run_count(),
            summary.passed_count(),
            summary.failed_count()
        )?;
        writeln!(w)?;
        Ok(())
    }

    fn print_summary(&self, w: &mut StandardStreamLock<'_>, summary: &Summary) -> io::Result<()> {
        let mut failed = summary.failed_cases().peekable();
        if failed.peek().is_some() {
            writeln!(w, "failures:")?;
            writeln!(w)?;
            for result in failed {
                writeln!(
                    w,
                    "---- {}::{} at {} ----",
                    result.desc.suite, result.desc.name, result.desc.location
                )?;
                match result.outcome {
                    Outcome::Failed { ref failures } => {
                        for failure in failures {
                            writeln!(
                                w,
                                "{} assertion failed: {}",
                                failure.location(),
                                failure.condition()
                            )?;
                        }
                    }
                    Outcome::Panicked(ref unwind) => writeln!(w, "{:#}", unwind)?,
                    Outcome::Passed => unreachable!(),
                }
                writeln!(w)?;
            }

            writeln!(w, "failures:")?;
            for result in summary.failed_cases() {
                writeln!(w, "    {}::{}", result.desc.suite, result.desc.name)?;
            }
            writeln!(w)?;
        }

        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green)
        } else {
            colored("FAILED").fg(Color::Red)
        };
        write!(w, "test result: ")?;
        status.fmt_colored(w)?;
        writeln!(
            w,
            ". {run} run across {suites} suite{suffix}; {passed} passed; {failed} failed",
            run = summary.total_run(),
            suites = summary.suite_count(),
            suffix = plural_suffix(summary.suite_count()),
            passed = summary.total_passed(),
            failed = summary.total_failed(),
        )?;
        Ok(())
    }
}

impl Reporter for ConsoleReporter {
    fn test_run_starting(&self, registry: &Registry) {
        let mut w = self.stream.lock();
        let _ = writeln!(
            w,
            "running {} test{} across {} suite{}",
            registry.case_count(),
            plural_suffix(registry.case_count()),
            registry.suite_count(),
            plural_suffix(registry.suite_count())
        );
        let _ = writeln!(w);
    }

    fn test_run_ended(&self, summary: &Summary) {
        let mut w = self.stream.lock();
        let _ = self.print_summary(&mut w, summary);
    }

    fn test_suite_starting(&self, suite: &Suite) {
        let mut w = self.stream.lock();
        let _ = self.print_suite_heading(&mut w, suite);
    }

    fn test_suite_ended(&self, summary: &SuiteSummary) {
        let mut w = self.stream.lock();
        let _ = self.print_suite_summary(&mut w, summary);
    }

    fn test_case_starting(&self, _: &TestDesc) {}

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        let mut w = self.stream.lock();
        let _ = self.print_case_summary(&mut w, summary);
    }
}
