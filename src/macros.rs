//! Variadic constructors. Each argument may be a string literal or any
//! parser; arguments are boxed so literals and sub-grammars mix freely.

/// `seq![a, b, ...]` builds a [`Seq`](crate::combinators::Seq).
#[macro_export]
macro_rules! seq {
    ($($parser:expr),+ $(,)?) => {
        $crate::combinators::Seq::new(vec![$($crate::core::boxed($parser)),+])
    };
}

/// `any![a, b, ...]` builds an [`Any`](crate::combinators::Any).
#[macro_export]
macro_rules! any {
    ($($parser:expr),+ $(,)?) => {
        $crate::combinators::Any::new(vec![$($crate::core::boxed($parser)),+])
    };
}

/// `any_with_name!(name, a, b, ...)` builds an
/// [`AnyWithName`](crate::combinators::AnyWithName).
#[macro_export]
macro_rules! any_with_name {
    ($name:expr, $($parser:expr),+ $(,)?) => {
        $crate::combinators::AnyWithName::new($name, vec![$($crate::core::boxed($parser)),+])
    };
}

/// `longest!(name, a, b, ...)` builds a [`Longest`](crate::combinators::Longest).
#[macro_export]
macro_rules! longest {
    ($name:expr, $($parser:expr),+ $(,)?) => {
        $crate::combinators::Longest::new($name, vec![$($crate::core::boxed($parser)),+])
    };
}

/// `signal_seq!(noise, signal, ...)` builds a
/// [`SignalSeq`](crate::combinators::SignalSeq).
#[macro_export]
macro_rules! signal_seq {
    ($noise:expr, $($signal:expr),+ $(,)?) => {
        $crate::combinators::SignalSeq::new(
            $crate::core::boxed($noise),
            vec![$($crate::core::boxed($signal)),+],
        )
    };
}
