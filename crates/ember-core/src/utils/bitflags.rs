// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A macro to declare bit-flag sets such as [`EventCategory`](crate::event::EventCategory).
#[macro_export]
#[doc(hidden)]
macro_rules! ember_bitflags {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag_name:ident = $flag_value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name {
            bits: $ty,
        }

        impl $name {
            /// The set with no flag raised.
            pub const EMPTY: Self = Self { bits: 0 };

            $(
                $(#[$flag_attr])*
                pub const $flag_name: Self = Self { bits: $flag_value };
            )*

            /// Every named flag together with its declared name.
            pub const NAMED: &'static [(&'static str, Self)] = &[
                $((stringify!($flag_name), Self::$flag_name),)*
            ];

            /// Builds a set from raw bits. Bits that match no named flag are kept.
            pub const fn from_bits_retain(bits: $ty) -> Self {
                Self { bits }
            }

            /// Returns the raw bits of the set.
            pub const fn bits(&self) -> $ty {
                self.bits
            }

            /// Returns `true` if no bit is raised.
            pub const fn is_empty(&self) -> bool {
                self.bits == 0
            }

            /// Returns `true` if every flag of `other` is raised in `self`.
            pub const fn contains(&self, other: Self) -> bool {
                (self.bits & other.bits) == other.bits
            }

            /// Returns `true` if `self` and `other` share at least one raised bit.
            pub const fn intersects(&self, other: Self) -> bool {
                (self.bits & other.bits) != 0
            }

            /// Raises the flags of `other` in `self`.
            pub fn insert(&mut self, other: Self) {
                self.bits |= other.bits;
            }

            /// Clears the flags of `other` from `self`.
            pub fn remove(&mut self, other: Self) {
                self.bits &= !other.bits;
            }

            /// Returns a copy of `self` with the flags of `other` raised.
            #[must_use]
            pub const fn with(mut self, other: Self) -> Self {
                self.bits |= other.bits;
                self
            }

            /// Returns a copy of `self` with the flags of `other` cleared.
            #[must_use]
            pub const fn without(mut self, other: Self) -> Self {
                self.bits &= !other.bits;
                self
            }

            /// Looks a single named flag up, ignoring case and underscores
            /// (`"MouseButton"`, `"mouse_button"` and `"MOUSE_BUTTON"` are equivalent).
            pub fn from_name(name: &str) -> Option<Self> {
                let wanted: String = name
                    .chars()
                    .filter(|c| *c != '_')
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                Self::NAMED.iter().find_map(|(flag_name, flag)| {
                    let candidate = flag_name
                        .chars()
                        .filter(|c| *c != '_')
                        .map(|c| c.to_ascii_lowercase());
                    candidate.eq(wanted.chars()).then_some(*flag)
                })
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self { bits: self.bits | other.bits }
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self { bits: self.bits & other.bits }
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.bits |= other.bits;
            }
        }

        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                self.bits &= other.bits;
            }
        }

        // Prints `Name { A | B }`, unknown bits as `UNKNOWN(0x..)`, nothing raised as `EMPTY`.
        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut remaining = self.bits;
                let mut first = true;

                write!(f, "{} {{ ", stringify!($name))?;

                for (flag_name, flag) in Self::NAMED {
                    if flag.bits != 0 && (remaining & flag.bits) == flag.bits {
                        if !first {
                            write!(f, " | ")?;
                        }
                        write!(f, "{}", flag_name)?;
                        remaining &= !flag.bits;
                        first = false;
                    }
                }

                if remaining != 0 {
                    if !first {
                        write!(f, " | ")?;
                    }
                    write!(f, "UNKNOWN({:#x})", remaining)?;
                    first = false;
                }

                if first {
                    write!(f, "EMPTY")?;
                }

                write!(f, " }}")
            }
        }
    };
}

#[cfg(test)]
mod tests {
    ember_bitflags! {
        /// Layer visibility mask used to exercise the macro.
        pub struct LayerMask: u16 {
            const WORLD = 1 << 0;
            const OVERLAY = 1 << 1;
            const DEBUG_DRAW = 1 << 2;
            const UI = 1 << 3;
        }
    }

    #[test]
    fn empty_set_has_no_bits() {
        let mask = LayerMask::EMPTY;
        assert!(mask.is_empty());
        assert_eq!(mask, LayerMask::default());
        assert!(!mask.intersects(LayerMask::WORLD));
        assert_eq!(format!("{mask:?}"), "LayerMask { EMPTY }");
    }

    #[test]
    fn union_contains_and_intersects() {
        let mask = LayerMask::WORLD | LayerMask::UI;
        assert_eq!(mask.bits(), 0b1001);
        assert!(mask.contains(LayerMask::WORLD));
        assert!(!mask.contains(LayerMask::WORLD | LayerMask::OVERLAY));
        assert!(mask.intersects(LayerMask::WORLD | LayerMask::OVERLAY));
        assert!(!mask.intersects(LayerMask::OVERLAY | LayerMask::DEBUG_DRAW));
        assert_eq!(format!("{mask:?}"), "LayerMask { WORLD | UI }");
    }

    #[test]
    fn insert_remove_and_const_builders() {
        let mut mask = LayerMask::OVERLAY;
        mask.insert(LayerMask::UI);
        mask.remove(LayerMask::OVERLAY);
        assert_eq!(mask, LayerMask::UI);

        const ALL_BUT_DEBUG: LayerMask = LayerMask::EMPTY
            .with(LayerMask::WORLD)
            .with(LayerMask::OVERLAY)
            .with(LayerMask::UI);
        assert_eq!(ALL_BUT_DEBUG.without(LayerMask::WORLD).bits(), 0b1010);

        let mut masked = ALL_BUT_DEBUG;
        masked &= LayerMask::UI | LayerMask::DEBUG_DRAW;
        assert_eq!(masked, LayerMask::UI);
        masked |= LayerMask::WORLD;
        assert_eq!(masked & LayerMask::WORLD, LayerMask::WORLD);
    }

    #[test]
    fn unknown_bits_are_kept_and_printed() {
        let unknown = LayerMask::from_bits_retain(1 << 8);
        assert!(!unknown.is_empty());
        assert_eq!(unknown.bits(), 0x100);

        let mask = LayerMask::WORLD | unknown;
        assert_eq!(mask.bits(), 0x101);
        assert_eq!(format!("{mask:?}"), "LayerMask { WORLD | UNKNOWN(0x100) }");
    }

    #[test]
    fn lookup_by_name_ignores_case_and_underscores() {
        assert_eq!(LayerMask::from_name("world"), Some(LayerMask::WORLD));
        assert_eq!(LayerMask::from_name("DebugDraw"), Some(LayerMask::DEBUG_DRAW));
        assert_eq!(LayerMask::from_name("debug_draw"), Some(LayerMask::DEBUG_DRAW));
        assert_eq!(LayerMask::from_name("Skybox"), None);
        assert_eq!(LayerMask::NAMED.len(), 4);
    }
}
