/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// The expression is matched by reference, so bindings borrow from it. On
/// failure the message names the expression, the full pattern including the
/// guard, and the value that was found.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {{
        let value = &$expr;
        match value {
            $pat $(if $guard)? => {}
            _ => ::core::panic!(
                "assertion failed: `{}` does not match `{}`\n value: {:?}",
                ::core::stringify!($expr),
                ::core::concat!(
                    ::core::stringify!($pat)
                    $(, " if ", ::core::stringify!($guard))?
                ),
                value,
            ),
        }
    }};
}
