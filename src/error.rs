// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for tuple construction and access.
//!
//! Every fallible operation in this crate fails with a [`TupleError`]. All
//! variants are fatal to the offending call: nothing is retried, nothing is
//! swallowed, and no partially constructed tuple ever escapes.

use thiserror::Error;

/// Errors raised by tuple construction and positional access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TupleError {
    /// The element count handed to [`Tuple::new`](crate::Tuple::new) does
    /// not match the declared size.
    #[error("arity mismatch: expected {expected} elements, got {actual}")]
    ArityMismatch {
        /// The size the tuple was declared with.
        expected: usize,
        /// The number of elements actually supplied.
        actual: usize,
    },

    /// A `fetch` index outside `[0, arity)`.
    ///
    /// `name` is the kind of tuple that rejected the index ("triad",
    /// "polyad", "tuple", ...), so the rendered message identifies the
    /// expected arity.
    #[error("index {index} is out of bounds for {name} of {arity} elements")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The arity the index was checked against.
        arity: usize,
        /// Human-readable tuple kind.
        name: &'static str,
    },

    /// Extremum query against the nullad, which has no elements to compare.
    #[error("a nullad contains no elements")]
    EmptyTuple,
}
