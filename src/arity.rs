// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named fixed-arity tuples, from the nullad up to the icosad, plus the
//! variable-arity [`Polyad`].
//!
//! Every type here is a pure pass-through over [`Tuple`]: construction
//! supplies the element count, and `fetch` narrows the accepted index range
//! to the known arity so the error message names the kind that rejected it.
//! No wrapper carries state or algorithms of its own: sorting, extrema,
//! comparison, iteration, and rendering all reach the core through
//! `Deref`/`DerefMut`.
//!
//! The fixed-arity constructors take `[T; N]`, so a miscounted element list
//! is a type error rather than a runtime [`ArityMismatch`]. The runtime
//! check survives on [`Tuple::new`] for callers whose counts are only known
//! dynamically.
//!
//! Two tuples of different concrete arity types are compared through the
//! arity-erased core: `a.as_tuple().cmp(b.as_tuple())`.
//!
//! [`ArityMismatch`]: crate::TupleError::ArityMismatch

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::TupleError;
use crate::tuple::Tuple;

/// Generates one named fixed-arity wrapper per `Name, "label", N` row.
///
/// The bounds check and the error payload both come from the same `N`
/// literal, so the message can never describe a different arity than the
/// one enforced.
macro_rules! arity_family {
    ($($(#[$doc:meta])+ $name:ident, $label:literal, $arity:literal;)+) => {
        $(
            $(#[$doc])+
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name<T>(Tuple<T>);

            impl<T> $name<T> {
                /// The number of elements this tuple kind holds.
                pub const ARITY: usize = $arity;

                /// Builds the tuple from exactly [`Self::ARITY`] elements.
                pub fn new(items: [T; $arity]) -> Self {
                    Self(Tuple::from_items(items.into()))
                }

                /// Returns the element at `idx`.
                ///
                /// Fails with [`TupleError::IndexOutOfRange`] when `idx`
                /// lies outside `[0, ARITY)`.
                pub fn fetch(&self, idx: usize) -> Result<&T, TupleError> {
                    if idx >= Self::ARITY {
                        return Err(TupleError::IndexOutOfRange {
                            index: idx,
                            arity: Self::ARITY,
                            name: $label,
                        });
                    }
                    self.0.fetch(idx)
                }

                /// Borrows the arity-erased core tuple.
                #[inline]
                pub fn as_tuple(&self) -> &Tuple<T> {
                    &self.0
                }

                /// Discards the arity type, yielding the core tuple.
                #[inline]
                pub fn into_tuple(self) -> Tuple<T> {
                    self.0
                }
            }

            impl<T> Deref for $name<T> {
                type Target = Tuple<T>;

                fn deref(&self) -> &Tuple<T> {
                    &self.0
                }
            }

            impl<T> DerefMut for $name<T> {
                fn deref_mut(&mut self) -> &mut Tuple<T> {
                    &mut self.0
                }
            }

            impl<T> From<$name<T>> for Tuple<T> {
                fn from(value: $name<T>) -> Tuple<T> {
                    value.0
                }
            }

            impl<T: Ord> Ord for $name<T> {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.0.cmp(&other.0)
                }
            }

            impl<T: Ord> PartialOrd for $name<T> {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl<T: fmt::Display> fmt::Display for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }
        )+
    };
}

arity_family! {
    /// A 1-element tuple.
    Monad, "monad", 1;
    /// A 2-element tuple (ordered pair).
    Dyad, "dyad", 2;
    /// A 3-element tuple.
    Triad, "triad", 3;
    /// A 4-element tuple.
    Tetrad, "tetrad", 4;
    /// A 5-element tuple.
    Pentad, "pentad", 5;
    /// A 6-element tuple.
    Hexad, "hexad", 6;
    /// A 7-element tuple.
    Heptad, "heptad", 7;
    /// An 8-element tuple.
    Octad, "octad", 8;
    /// A 9-element tuple.
    Ennead, "ennead", 9;
    /// A 10-element tuple.
    Decad, "decad", 10;
    /// An 11-element tuple.
    Hendecad, "hendecad", 11;
    /// A 12-element tuple.
    Dodecad, "dodecad", 12;
    /// A 13-element tuple.
    Triskaidecad, "triskaidecad", 13;
    /// A 14-element tuple.
    Tetrakaidecad, "tetrakaidecad", 14;
    /// A 15-element tuple.
    Pentakaidecad, "pentakaidecad", 15;
    /// A 16-element tuple.
    Hexakaidecad, "hexakaidecad", 16;
    /// A 17-element tuple.
    Heptakaidecad, "heptakaidecad", 17;
    /// An 18-element tuple.
    Octakaidecad, "octakaidecad", 18;
    /// A 19-element tuple.
    Enneakaidecad, "enneakaidecad", 19;
    /// A 20-element tuple.
    Icosad, "icosad", 20;
}

// ============================================================================
// NULLAD (zero elements)
// ============================================================================

/// The zero-element tuple (unit case).
///
/// Kept out of the generated family because its constructor takes no
/// elements at all and its `fetch` rejects every index unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nullad<T>(Tuple<T>);

impl<T> Nullad<T> {
    /// The number of elements this tuple kind holds.
    pub const ARITY: usize = 0;

    /// Builds the empty tuple.
    pub fn new() -> Self {
        Self(Tuple::from_items(Vec::new()))
    }

    /// Always fails: a nullad has no fetchable positions.
    pub fn fetch(&self, idx: usize) -> Result<&T, TupleError> {
        Err(TupleError::IndexOutOfRange {
            index: idx,
            arity: Self::ARITY,
            name: "nullad",
        })
    }

    /// Borrows the arity-erased core tuple.
    #[inline]
    pub fn as_tuple(&self) -> &Tuple<T> {
        &self.0
    }

    /// Discards the arity type, yielding the core tuple.
    #[inline]
    pub fn into_tuple(self) -> Tuple<T> {
        self.0
    }
}

impl<T> Default for Nullad<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Nullad<T> {
    type Target = Tuple<T>;

    fn deref(&self) -> &Tuple<T> {
        &self.0
    }
}

impl<T> DerefMut for Nullad<T> {
    fn deref_mut(&mut self) -> &mut Tuple<T> {
        &mut self.0
    }
}

impl<T> From<Nullad<T>> for Tuple<T> {
    fn from(value: Nullad<T>) -> Tuple<T> {
        value.0
    }
}

impl<T: Ord> Ord for Nullad<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Ord> PartialOrd for Nullad<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> fmt::Display for Nullad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// POLYAD (variable arity)
// ============================================================================

/// A tuple of caller-determined arity.
///
/// The declared size is the supplied sequence's own length, so construction
/// is infallible; `fetch` re-validates against that length and reports the
/// rejection as a polyad's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyad<T>(Tuple<T>);

impl<T> Polyad<T> {
    /// Builds a polyad from a sequence of any length.
    pub fn new(items: Vec<T>) -> Self {
        Self(Tuple::from_items(items))
    }

    /// Returns the element at `idx`.
    ///
    /// Fails with [`TupleError::IndexOutOfRange`] when `idx` lies outside
    /// `[0, len)`.
    pub fn fetch(&self, idx: usize) -> Result<&T, TupleError> {
        if idx >= self.0.len() {
            return Err(TupleError::IndexOutOfRange {
                index: idx,
                arity: self.0.len(),
                name: "polyad",
            });
        }
        self.0.fetch(idx)
    }

    /// Borrows the arity-erased core tuple.
    #[inline]
    pub fn as_tuple(&self) -> &Tuple<T> {
        &self.0
    }

    /// Discards the arity type, yielding the core tuple.
    #[inline]
    pub fn into_tuple(self) -> Tuple<T> {
        self.0
    }
}

impl<T> Deref for Polyad<T> {
    type Target = Tuple<T>;

    fn deref(&self) -> &Tuple<T> {
        &self.0
    }
}

impl<T> DerefMut for Polyad<T> {
    fn deref_mut(&mut self) -> &mut Tuple<T> {
        &mut self.0
    }
}

impl<T> From<Polyad<T>> for Tuple<T> {
    fn from(value: Polyad<T>) -> Tuple<T> {
        value.0
    }
}

impl<T: Ord> Ord for Polyad<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Ord> PartialOrd for Polyad<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> fmt::Display for Polyad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
