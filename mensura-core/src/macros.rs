//! Macro for declaring the compiled-in unit table.

/// Expands the unit table into the [`UnitId`](crate::UnitId) enum and its
/// registry accessors.
///
/// One invocation declares every unit the core knows about, grouped by
/// dimension:
///
/// ```text
/// units! {
///     Length {
///         Meter = 10011, "m", 1.0;
///         Kilometer = 10014, "km", 1e3;
///     }
/// }
/// ```
///
/// Each line is `Name = discriminant, symbol, factor-to-base-unit`. The
/// macro generates, from the single table:
///
/// - the `#[repr(u32)]` `UnitId` enum with explicit discriminants,
/// - `UnitId::ALL`, `UnitId::from_u32`, `UnitId::name`, `UnitId::symbol`
///   (plus NUL-terminated variants for the C boundary),
/// - the total `entry_of` match backing [`registry::lookup`](crate::registry::lookup).
///
/// Discriminants are part of the ABI contract: `dimension code * 10_000 +
/// index`, assigned once and never renumbered.
macro_rules! units {
    (
        $(
            $dim:ident {
                $( $name:ident = $disc:literal, $sym:literal, $factor:expr; )+
            }
        )+
    ) => {
        /// Unit identifier.
        ///
        /// Each variant names exactly one registry entry. The discriminant
        /// is the stable integer crossing every language boundary; its
        /// leading digit encodes the dimension.
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UnitId {
            $($(
                #[doc = concat!(stringify!($name), " (", $sym, ").")]
                $name = $disc,
            )+)+
        }

        impl UnitId {
            /// Every unit in the registry, in id order.
            pub const ALL: &'static [UnitId] = &[
                $($( UnitId::$name, )+)+
            ];

            /// Resolves a raw integer id crossing an ABI boundary.
            ///
            /// Returns `None` for ids outside the compiled table; callers
            /// map that to [`Status::UnknownUnit`](crate::Status::UnknownUnit).
            pub const fn from_u32(raw: u32) -> Option<UnitId> {
                match raw {
                    $($( $disc => Some(UnitId::$name), )+)+
                    _ => None,
                }
            }

            /// PascalCase unit name, e.g. `"Kilometer"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $($( UnitId::$name => stringify!($name), )+)+
                }
            }

            /// Display symbol, e.g. `"km"`.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($( UnitId::$name => $sym, )+)+
                }
            }

            /// NUL-terminated [`name`](UnitId::name) for C consumers.
            pub const fn name_cstr(self) -> &'static str {
                match self {
                    $($( UnitId::$name => concat!(stringify!($name), "\0"), )+)+
                }
            }

            /// NUL-terminated [`symbol`](UnitId::symbol) for C consumers.
            pub const fn symbol_cstr(self) -> &'static str {
                match self {
                    $($( UnitId::$name => concat!($sym, "\0"), )+)+
                }
            }
        }

        /// Total registry match; `registry::lookup` wraps this in the
        /// `Option` contract shared with the raw-integer boundary.
        pub(crate) const fn entry_of(id: UnitId) -> UnitEntry {
            match id {
                $($(
                    UnitId::$name => UnitEntry {
                        dimension: Dimension::$dim,
                        factor: $factor,
                        symbol: $sym,
                        name: stringify!($name),
                    },
                )+)+
            }
        }
    };
}

pub(crate) use units;
