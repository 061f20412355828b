#[cfg(test)]
tally::test_harness!();

#[cfg(test)]
mod tests {
    use tally::Context;

    #[tally::test_case(suite = Alpha, name = Test1)]
    fn alpha_one(ctx: &mut Context<'_>) {
        tally::check_eq!(ctx, 0, 0);
    }

    // The run's only failing case. Under the default exit policy a single
    // failure still exits with status zero, which is what lets this target
    // pass as a test.
    #[tally::test_case(suite = Beta, name = First)]
    fn beta_first(ctx: &mut Context<'_>) {
        tally::check_eq!(ctx, 0, 1);
    }

    // No assertions at all; reported as passed.
    #[tally::test_case(suite = Alpha, name = Test2)]
    fn alpha_two(_: &mut Context<'_>) {}
}
