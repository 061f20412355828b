/*!
A minimal unit testing harness with self-registering, suite-grouped test
cases.

A test case is a free function taking a [`Context`]. Attaching
`#[tally::test_case]` with a suite name is all it takes for the runner to
find it; the case is collected at link time and registered on startup:

```
# fn main() {}
#[tally::test_case(suite = Alpha)]
fn test1(ctx: &mut tally::Context<'_>) {
    tally::check_eq!(ctx, 1 + 1, 2);
}
```

Every case declared under the same suite name joins the same suite, whether
or not the declarations share a module or a file. Suites and the cases
within them keep their registration order, and the runner executes them
strictly in that order.

A harness binary is a test target built with `harness = false`:

```toml
[[test]]
name = "smoke"
path = "tests/smoke.rs"
harness = false
```

The target's source declares its cases and generates the entry point with
`tally::test_harness!();`, which collects every registered case and hands
them to the runner.

Assertion checks short-circuit the case they run in: the first failing
`check!` records the failure and returns from the test function. The
remaining cases still run, and the process exit status is derived from the
number of failed cases under the selected [`ExitPolicy`].
!*/

#![doc(html_root_url = "https://docs.rs/tally/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;

mod exit_status;
mod harness;
mod registry;
mod report;
mod reporter;
mod runner;
mod session;
mod test;

pub use crate::{
    exit_status::{ExitPolicy, ExitStatus},
    registry::{Registry, Suite},
    report::{Failure, Reporter, SuiteSummary, Summary, TestCaseSummary},
    reporter::{ConsoleReporter, LogReporter},
    runner::{run_all, TestCases},
    session::Session,
    test::{Context, Location, TestCase, TestDesc, TestFn},
};

/// Declare a suite-grouped test case.
///
/// The attribute takes the owning suite's name, required, and an optional
/// display name overriding the function identifier:
///
/// ```
/// # fn main() {}
/// #[tally::test_case(suite = Strings, name = "starts empty")]
/// fn fresh(ctx: &mut tally::Context<'_>) {
///     tally::check_eq!(ctx, String::new().len(), 0);
/// }
/// ```
///
/// Both parameters accept a bare identifier or a string literal. Cases
/// registered under one suite name happily share a display name; each entry
/// runs on its own.
pub use tally_macros::test_case;

#[doc(hidden)] // private API.
pub use crate::runner::test_runner;

hidden_item! {
    /// Re-exported items for #[test_case]
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            test::{Context, Location, TestCase, TestDesc, TestFn},
        };
        pub use std::{column, file, line, stringify};
    }

    /// Re-exported items for test_harness!() and __test_case_harness!()
    #[cfg(feature = "harness")]
    pub mod _test_harness_reexports {
        pub use {
            crate::harness::{main, TEST_CASES},
            linkme::{self, distributed_slice},
        };
    }
}

#[doc(hidden)] // private API
#[cfg(feature = "harness")]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        $crate::__test_case_harness!($item);
    };
}

#[doc(hidden)] // private API
#[cfg(not(feature = "harness"))]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        /* stub */
    };
}
