#![cfg(feature = "harness")]

use crate::{runner::test_runner, test::TestCase};
use linkme::distributed_slice;

#[doc(hidden)] // private API.
#[distributed_slice]
pub static TEST_CASES: [&'static TestCase] = [..];

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_case_harness {
    ( $item:item ) => {
        #[$crate::_test_harness_reexports::distributed_slice(
            $crate::_test_harness_reexports::TEST_CASES
        )]
        #[linkme(crate = $crate::_test_harness_reexports::linkme)]
        $item
    };
}

#[doc(hidden)] // private API.
pub fn main() {
    test_runner(&*TEST_CASES)
}

/// Generate the `main` function of a test harness binary.
///
/// The generated entry point collects every test case declared with
/// `#[test_case]` across the crate being compiled, registers them and runs
/// them all. Meant for test targets built with `harness = false`:
///
/// ```toml
/// [[test]]
/// name = "smoke"
/// harness = false
/// ```
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}
