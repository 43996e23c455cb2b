//! Macro for declaring token parts.

/// Declare a single-character token part enum and implement `TokenPart`
/// and `Display` for it.
///
/// # Example
///
/// ```
/// use tm_combos::core::TokenPart;
/// use tm_combos::token_part;
///
/// token_part! {
///     pub enum Colour {
///         Black = 'K',
///         White = 'W',
///     }
/// }
///
/// assert_eq!(Colour::Black.symbol(), 'K');
/// assert_eq!(Colour::White.to_string(), "W");
/// assert_eq!(Colour::from_symbol('W'), Some(Colour::White));
/// ```
#[macro_export]
macro_rules! token_part {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::TokenPart for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn symbol(&self) -> char {
                match self {
                    $(Self::$variant => $symbol),*
                }
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::core::TokenPart::symbol(self))
            }
        }
    };
}
