//! This module holds the storage types for attribute values.

pub mod binary;
pub mod fragments;

pub use self::binary::{BinaryBuffer, BinaryReader, BinaryValue, BinaryWriter, PROMOTION_THRESHOLD};
pub use self::fragments::FragmentSequence;

use smallvec::SmallVec;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;
