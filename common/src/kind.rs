//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Textual representation of variants is `snake_case` and is parsed
/// case-insensitively. With the `serde` feature, variants are (de)serialized
/// in `SCREAMING_SNAKE_CASE`.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!("cube".parse::<Kind>().unwrap(), Kind::Cube);
/// assert_eq!(Kind::Sphere.to_string(), "sphere");
/// assert_eq!(Kind::ALL, &[Kind::Cube, Kind::Sphere]);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $crate::with_kind_serde! {
            #[derive(
                Clone,
                Copy,
                Debug,
                $crate::private::strum::Display,
                $crate::private::strum::EnumString,
                Eq,
                Hash,
                Ord,
                PartialEq,
                PartialOrd,
            )]
            #[doc = $doc]
            #[repr(u8)]
            #[strum(serialize_all = "snake_case", ascii_case_insensitive)]
            pub enum $name {
                $(
                     #[doc = $variant_doc]
                     $variant = $value,
                )*
            }
        }

        impl $name {
            /// All the variants in their declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }
    };
}

/// Adds [`serde`] support to the provided kind enum.
///
/// [`serde`]: https://docs.rs/serde
#[cfg(feature = "serde")]
#[doc(hidden)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! with_kind_serde {
    ($kind:item) => {
        #[derive(
            $crate::private::serde::Deserialize,
            $crate::private::serde::Serialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        $kind
    };
}

/// Leaves the provided kind enum without [`serde`] support.
///
/// [`serde`]: https://docs.rs/serde
#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! with_kind_serde {
    ($kind:item) => {
        $kind
    };
}
