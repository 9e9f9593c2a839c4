//! Macros for defining closed enumerations of labeled kinds.

/// Macro for defining a kind enum.
///
/// Every variant is bound to the human-readable label it is displayed as and
/// parsed from. Parsing is case-sensitive and accepts only the exact label.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = "Cube",
///
///         #[doc = "A round sphere"]
///         RoundSphere = "Round Sphere",
///     }
/// }
///
/// assert_eq!(Kind::RoundSphere.to_string(), "Round Sphere");
/// assert_eq!("Cube".parse::<Kind>(), Ok(Kind::Cube));
/// assert!("cube".parse::<Kind>().is_err());
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $label:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            $crate::private::strum::IntoStaticStr,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $label)]
                $variant,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the label this variant is displayed as.
            #[must_use]
            pub fn label(self) -> &'static str {
                self.into()
            }
        }
    };
}
