#![allow(missing_docs)]

use crate::{
    exit_status::{ExitPolicy, ExitStatus},
    registry::Registry,
    report::Reporter,
    reporter::{ConsoleReporter, LogReporter},
    runner::run_all,
    test::TestCase,
};
use getopts::Options;
use std::{path::Path, str::FromStr};
use termcolor::ColorChoice;

/// Command line arguments.
#[derive(Debug)]
struct Args {
    list_tests: bool,
    color: ColorConfig,
    use_log: bool,
    strict: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ColorConfig {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(anyhow::anyhow!(
                "argument for --color must be auto, always, or never (was: {:?})",
                v
            )),
        }
    }
}

struct Parser {
    args: Vec<String>,
    opts: Options,
}

impl Parser {
    fn new(args: impl IntoIterator<Item = String>) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag(
            "",
            "list",
            "List all registered test cases without running them",
        );
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );
        opts.optflag(
            "",
            "strict",
            "Exit with a nonzero status when any test case fails",
        );
        opts.optflag("", "log", "Report through the log facade instead of the console");

        Self {
            args: args.into_iter().collect(),
            opts,
        }
    }

    fn print_usage(&self) {
        let binary = &self.args[0];
        let progname = Path::new(binary)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(binary);
        eprintln!(
            "{}",
            self.opts.usage(&format!("Usage: {} [OPTIONS]", progname))
        );
    }

    /// `Ok(None)` means the help message was requested.
    fn parse(&self) -> anyhow::Result<Option<Args>> {
        let args = &self.args[..];
        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;

        if matches.opt_present("help") {
            return Ok(None);
        }

        anyhow::ensure!(
            matches.free.is_empty(),
            "unexpected positional argument: {:?}",
            matches.free[0]
        );

        let list_tests = matches.opt_present("list");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);
        let use_log = matches.opt_present("log");
        let strict = matches.opt_present("strict");

        Ok(Some(Args {
            list_tests,
            color,
            use_log,
            strict,
        }))
    }
}

/// A prepared test run.
pub struct Session {
    args: Args,
}

impl Session {
    /// Build a session from the command line of the current process.
    ///
    /// `Err` carries the status the process should exit with instead of
    /// running tests: requesting `--help` prints the usage text and maps to
    /// a success status, while a malformed command line is reported on
    /// stderr and maps to a failed status.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let parser = Parser::new(std::env::args());
        match parser.parse() {
            Ok(Some(args)) => Ok(Self { args }),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }

    /// The exit policy selected on the command line.
    pub fn exit_policy(&self) -> ExitPolicy {
        if self.args.strict {
            ExitPolicy::AnyFailure
        } else {
            ExitPolicy::default()
        }
    }

    /// Register the given test cases, run them all and report the results.
    ///
    /// Returns the exit status derived from the number of failed cases under
    /// the selected [`ExitPolicy`].
    pub fn run(&self, cases: &[&'static TestCase]) -> ExitStatus {
        let registry = Registry::from_cases(cases.iter().copied());

        if self.args.list_tests {
            self.print_list(&registry);
            return ExitStatus::OK;
        }

        let reporter: Box<dyn Reporter> = if self.args.use_log {
            Box::new(LogReporter::new())
        } else {
            Box::new(ConsoleReporter::new(match self.args.color {
                ColorConfig::Auto => ColorChoice::Auto,
                ColorConfig::Always => ColorChoice::Always,
                ColorConfig::Never => ColorChoice::Never,
            }))
        };

        let summary = run_all(&registry, &*reporter);
        summary.status(self.exit_policy())
    }

    fn print_list(&self, registry: &Registry) {
        fn plural_suffix(n: usize) -> &'static str {
            match n {
                1 => "",
                _ => "s",
            }
        }

        for suite in registry.suites() {
            for case in suite.cases() {
                println!("{}::{}: test", case.desc.suite, case.desc.name);
            }
        }

        if registry.case_count() != 0 {
            println!();
        }
        println!(
            "{} test{} across {} suite{}",
            registry.case_count(),
            plural_suffix(registry.case_count()),
            registry.suite_count(),
            plural_suffix(registry.suite_count())
        );
    }
}
