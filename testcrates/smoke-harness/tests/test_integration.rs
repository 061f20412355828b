tally::test_harness!();

use tally::Context;

#[tally::test_case(suite = Integration)]
fn registers_across_modules(ctx: &mut Context<'_>) {
    tally::check!(ctx, true);
}

mod nested {
    #[tally::test_case(suite = Integration, name = "from nested module")]
    fn nested_case(ctx: &mut tally::Context<'_>) {
        tally::check_eq!(ctx, 2 * 21, 42);
    }
}
