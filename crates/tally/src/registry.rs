//! The suite registry.

use crate::test::TestCase;

/// An ordered, named group of test cases.
pub struct Suite {
    name: &'static str,
    cases: Vec<&'static TestCase>,
}

impl Suite {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            cases: vec![],
        }
    }

    /// Name of the suite.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered cases, in registration order.
    pub fn cases(&self) -> &[&'static TestCase] {
        &self.cases
    }

    /// Number of registered cases.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    fn add_case(&mut self, case: &'static TestCase) {
        // Names are not deduplicated; cases registered under the same name
        // coexist and each runs on its own.
        self.cases.push(case);
    }
}

/// The ordered collection of suites prepared for one run.
///
/// Suites appear in the order their first case was registered; registering
/// further cases under a known suite name appends to the existing suite
/// instead of creating a new one.
#[derive(Default)]
pub struct Registry {
    suites: Vec<Suite>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the test cases collected at link time.
    ///
    /// The collected slice carries no ordering guarantee, so the cases are
    /// first ordered by declaration site. Within a file this reproduces
    /// declaration order; across files it groups by path.
    pub fn from_cases<I>(cases: I) -> Self
    where
        I: IntoIterator<Item = &'static TestCase>,
    {
        let mut cases: Vec<_> = cases.into_iter().collect();
        cases.sort_by_key(|case| {
            let loc = &case.desc.location;
            (loc.file, loc.line, loc.column)
        });

        let mut registry = Self::new();
        for case in cases {
            registry.register(case);
        }
        registry
    }

    /// Register a test case under the suite named in its descriptor.
    pub fn register(&mut self, case: &'static TestCase) {
        self.suite_named(case.desc.suite).add_case(case);
    }

    /// Return the suite with the given name, creating and appending it if no
    /// suite under that name exists yet.
    pub fn suite_named(&mut self, name: &'static str) -> &mut Suite {
        // A linear scan over exact name matches. The suite list stays small
        // and insertion ordered, so no index is kept.
        let pos = match self.suites.iter().position(|suite| suite.name == name) {
            Some(pos) => pos,
            None => {
                self.suites.push(Suite::new(name));
                self.suites.len() - 1
            }
        };
        &mut self.suites[pos]
    }

    /// Registered suites, in first-registration order.
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Number of registered suites.
    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Total number of registered cases across all suites.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(Suite::case_count).sum()
    }
}
