/// Implements TryFrom conversions from Sexp-like containers into the
/// Primitive variant $name.
///
/// Failed conversions hand back the original value so that callers can
/// report what they were given.
///
/// Example:
///   impl_try_from!(Number;
///                  Primitive  ->  Number,
///                  Sexp       ->  Number,
///                  ref Sexp   ->  ref Number,
///   );
macro_rules! impl_try_from {
    (@impl $name:ident; Primitive -> $to:ident, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::primitive::Primitive> for $to {
            type Error = $crate::primitive::Primitive;

            fn try_from(value: $crate::primitive::Primitive) -> Result<Self, Self::Error> {
                if let $crate::primitive::Primitive::$name(val) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident; Sexp -> $to:ident, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::sexp::Sexp> for $to {
            type Error = $crate::sexp::Sexp;

            fn try_from(value: $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive(
                    $crate::primitive::Primitive::$name(val)
                ) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident; ref Sexp -> ref $to:ident, $($tail:tt)*) => {
        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive(
                    $crate::primitive::Primitive::$name(val)
                ) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident;) => {};
    ($name:ident; $($tail:tt)*) => {
        impl_try_from!(@impl $name; $($tail)*);
    };
}
