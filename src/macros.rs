//! Macros for declaring lifecycle state enums.

/// Generate a `State` trait implementation for a plain enum.
///
/// Extra derives and docs can be attached to the enum; `Clone`, `PartialEq`,
/// `Debug` and the serde traits are always derived.
///
/// # Example
///
/// ```
/// use teller::state_enum;
/// use teller::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum LoanState {
///         Requested,
///         Approved,
///         Repaid,
///         Defaulted,
///     }
///     final: [Repaid, Defaulted]
///     error: [Defaulted]
/// }
///
/// assert_eq!(LoanState::Approved.name(), "Approved");
/// assert!(LoanState::Defaulted.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
