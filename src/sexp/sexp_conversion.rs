/// Breaks builtin Args into Result<tuple of component types, Error>,
/// assuming all component types implement TryFrom<Sexp>.
///
/// Example:
///  let (lst, k) = break_args!(args => (Sexp, Number))?;
macro_rules! break_args {
    (@count $_ignored:ty) => { 1usize };
    ($args:expr => ($($type:ty),+ $(,)?)) => {
        {
            let args: $crate::primitive::builtin::Args = $args;
            let tuple = || {
                let expected: usize = 0 $(+ break_args!(@count $type))+;
                if args.len() != expected {
                    return Err($crate::error::Error::empty_context(
                        $crate::error::ErrKind::WrongArgumentCount {
                            given: args.len(),
                            expected: $crate::error::ExpectedCount::Exactly(expected),
                        }
                    ));
                }

                let mut iter = args.into_iter();
                Ok((
                    $(
                        match <$type as std::convert::TryFrom<$crate::sexp::Sexp>>::try_from(
                            iter.next().unwrap_or_default()
                        ) {
                            Ok(val) => val,
                            Err(original) => {
                                return Err($crate::error::Error::empty_context(
                                    $crate::error::ErrKind::InvalidArgument {
                                        given: original.into(),
                                        expected: std::borrow::Cow::Borrowed(
                                            concat!("type ", stringify!($type))
                                        ),
                                    }
                                ));
                            }
                        },
                    )+
                ))
            };

            tuple()
        }
    };
}

// Should not be used directly. Use list! below.
macro_rules! list_inner {
    () => { $crate::sexp::Sexp::Nil };
    (@cons $car:expr, $cdr:expr) => {
        $crate::sexp::cons($car.into(), $cdr)
    };
    (($($sub:tt)*), $($tail:tt)*) => {
        list_inner!(@cons list_inner!($($sub)*), list_inner!($($tail)*))
    };
    ($elem:expr, $($tail:tt)*) => {
        list_inner!(@cons $elem, list_inner!($($tail)*))
    };
}

/// Returns the elements as a Sexp list.
///
/// Provided elements must implement Into<Sexp>.
/// Trailing commas currently must be used.
///
/// Example:
///   list!(a, b, (c, (d,),), e,)
macro_rules! list {
    ($($tail:tt)*) => {
        list_inner!($($tail)*)
    }
}
