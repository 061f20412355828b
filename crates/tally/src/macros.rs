macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Check that a boolean condition holds, recording the result on the test
/// context.
///
/// A passing check is reported through `Context::on_pass` and execution
/// continues. A failing check is reported through `Context::on_fail`
/// together with its source location, and the enclosing test case
/// implementation returns immediately; the checks after it are not
/// evaluated. The remaining test cases still run.
///
/// ```
/// # fn main() {}
/// #[tally::test_case(suite = Math)]
/// fn arithmetic(ctx: &mut tally::Context<'_>) {
///     tally::check!(ctx, 2 + 2 == 4);
/// }
/// ```
#[macro_export]
macro_rules! check {
    ( $ctx:ident, $cond:expr ) => {{
        use $crate::_test_reexports as __tally;
        const LOCATION: __tally::Location = __tally::location!();
        if !($cond) {
            $ctx.on_fail(&LOCATION, __tally::stringify!($cond));
            return;
        } else {
            $ctx.on_pass(__tally::stringify!($cond));
        }
    }};
}

/// Check that two values compare equal with `==`.
///
/// Shorthand for `check!(ctx, (lhs) == (rhs))`, with the same early-return
/// contract as `check!`.
#[macro_export]
macro_rules! check_eq {
    ( $ctx:ident, $lhs:expr, $rhs:expr ) => {
        $crate::check!($ctx, ($lhs) == ($rhs));
    };
}

/// Check that two string values compare equal.
///
/// Both operands are taken through `AsRef<str>`, so `String`, `&str` and
/// other string-like types mix freely. The early-return contract is the same
/// as `check!`.
#[macro_export]
macro_rules! check_eq_str {
    ( $ctx:ident, $lhs:expr, $rhs:expr ) => {{
        use $crate::_test_reexports as __tally;
        const LOCATION: __tally::Location = __tally::location!();
        let lhs = &$lhs;
        let rhs = &$rhs;
        let lhs: &str = ::std::convert::AsRef::as_ref(lhs);
        let rhs: &str = ::std::convert::AsRef::as_ref(rhs);
        if lhs != rhs {
            $ctx.on_fail(&LOCATION, __tally::stringify!($lhs == $rhs));
            return;
        } else {
            $ctx.on_pass(__tally::stringify!($lhs == $rhs));
        }
    }};
}

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __tally;
        __tally::Location {
            file: __tally::file!(),
            line: __tally::line!(),
            column: __tally::column!(),
        }
    }};
}
