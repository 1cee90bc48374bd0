//! Fixed-arity ordered tuples with lexicographic comparison and stable
//! value sorting.
//!
//! This crate provides a single arity-erased core, [`Tuple<T>`], plus a
//! family of named fixed-arity wrappers (nullad through icosad) and the
//! variable-arity [`Polyad`]. A tuple holds a fixed number of elements of
//! one totally ordered type and supports positional access, extremum
//! queries, in-place reordering by value, lexicographic comparison across
//! differing lengths, and a canonical `⟨e0, e1, …⟩` rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    arity.rs                      │
//! │  (Nullad, Monad, Dyad, ..., Icosad, Polyad:      │
//! │   arity check + error-message specialization)    │
//! └───────────────────────┬──────────────────────────┘
//!                         │ Deref / fetch delegation
//!                         ▼
//! ┌──────────────────────────────────────────────────┐
//! │                    tuple.rs                      │
//! │  (Tuple<T>: construction, fetch, extrema,        │
//! │   stable sorts, lexicographic Ord, Display)      │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//!                         ▼
//! ┌──────────────────────────────────────────────────┐
//! │                    error.rs                      │
//! │  (TupleError: ArityMismatch, IndexOutOfRange,    │
//! │   EmptyTuple)                                    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The wrappers add nothing behavioral: they construct the core with their
//! known element count and intercept only `fetch`, to narrow the accepted
//! index range and name themselves in the error. Everything else (sorting,
//! extrema, iteration, comparison, rendering) is the core's.
//!
//! # Usage
//!
//! ```
//! use polyad::{Triad, Tuple};
//!
//! let mut triad = Triad::new([3, 1, 2]);
//! triad.sort_natural();
//! assert_eq!(triad.to_vec(), vec![1, 2, 3]);
//! assert_eq!(triad.to_string(), "⟨1, 2, 3⟩");
//!
//! // Lexicographic order with length as the final tie-break:
//! let a = Tuple::from_items(vec![1, 2]);
//! let b = Tuple::from_items(vec![1, 2, 0]);
//! assert!(a < b);
//! ```

mod arity;
mod error;
mod tuple;

pub mod testing;

// Re-exports for public API
pub use arity::{
    Decad, Dodecad, Dyad, Ennead, Enneakaidecad, Hendecad, Heptad, Heptakaidecad, Hexad,
    Hexakaidecad, Icosad, Monad, Nullad, Octad, Octakaidecad, Pentad, Pentakaidecad, Polyad,
    Tetrad, Tetrakaidecad, Triad, Triskaidecad,
};
pub use error::TupleError;
pub use tuple::Tuple;
