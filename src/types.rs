//! Core value types for the colour-transition link.
//!
//! Zero-cost newtypes keep symbols and durations from being mixed up with
//! plain integers. All types use `#[repr(transparent)]`.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SYMBOL, SYMBOL_MASK};

/// Macro to generate newtype wrappers with common implementations
macro_rules! chroma_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty) => $prefix:literal
        $(, custom_methods: { $($custom:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new instance
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Raw value
            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }

            $($($custom)*)?
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl Deref for $name {
            type Target = $inner;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for $inner {
            #[inline]
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl PartialOrd<$inner> for $name {
            #[inline]
            fn partial_cmp(&self, other: &$inner) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<$name> for $inner {
            #[inline]
            fn partial_cmp(&self, other: &$name) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }
    };
}

chroma_newtype!(
    /// One 2-bit unit of payload carried by a single colour transition.
    ///
    /// Values above 3 can be constructed but are never produced by the codec;
    /// lookups clamp them with [`Symbol::clamped`].
    Symbol(u8) => "S",
    custom_methods: {
        /// Extracts the symbol at pair position `pair` (0 = least significant) of `byte`.
        #[inline]
        pub const fn from_byte_pair(byte: u8, pair: usize) -> Self {
            Self((byte >> (pair * 2)) & SYMBOL_MASK)
        }

        /// Returns the symbol limited to the valid `0..=3` range.
        #[inline]
        pub const fn clamped(self) -> Self {
            if self.0 > MAX_SYMBOL {
                Self(MAX_SYMBOL)
            } else {
                self
            }
        }

        /// Returns `true` if the value fits in two bits.
        #[inline]
        pub const fn is_valid(self) -> bool {
            self.0 <= MAX_SYMBOL
        }
    }
);

chroma_newtype!(
    /// A hold duration in link time units.
    Ticks(u32) => "T",
    custom_methods: {
        /// Saturating addition, used when accumulating total airtime.
        #[inline]
        pub const fn saturating_add(self, rhs: Self) -> Self {
            Self(self.0.saturating_add(rhs.0))
        }
    }
);

impl Symbol {
    /// The "same/neutral" transition symbol.
    pub const NEUTRAL: Self = Self::new(0);
    /// Every valid symbol, in ascending order.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];
}

impl Ticks {
    /// Zero duration.
    pub const ZERO: Self = Self::new(0);
}
