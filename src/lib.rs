//! This crate provides the
//! [`StaticVec`](https://docs.rs/static-vec/latest/static_vec/generic/struct.StaticVec.html)
//! data structure for fixed-capacity arrays that never allocate.
//! The capacity `N` is a compile-time constant and the elements are stored inline,
//! in the `StaticVec` value itself, which makes it suitable for embedded and other
//! `no_std` environments where the heap is not available.
//! Additionally this crate provides a
//! [`StaticString`](https://docs.rs/static-vec/latest/static_vec/string/struct.StaticString.html)
//! for fixed-capacity strings based on `StaticVec`.
//!
//! ## Basic usage
//!
//! A `StaticVec` starts empty and no element is constructed until one is inserted.
//! Inserting into a full vector does not grow it: the insertion is simply rejected.
//! ```rust
//! use static_vec::StaticVec;
//!
//! let mut vec: StaticVec<String, 3> = StaticVec::new();
//! assert!(vec.emplace_back(|| "Hello".to_string()));
//! assert!(vec.emplace_back(|| "Embedded".to_string()));
//! assert!(vec.emplace_back(|| "World".to_string()));
//! assert!(!vec.emplace_back(|| "Overflow".to_string())); // full, nothing happens.
//! assert_eq!(vec.len(), 3);
//!
//! assert!(vec.pop_back()); // drops "World".
//! assert_eq!(vec[0], "Hello");
//! assert_eq!(vec[1], "Embedded");
//! ```
//!
//! Elements can be accessed with a bounds check (`get`, or indexing which panics
//! when out of bounds) or without one (`get_unchecked`, where the caller guarantees
//! that the index is lower than `len()`).
//!
//! Cloning a `StaticVec` clones every element into a new, independent vector.
//! Moving the elements out while keeping the source usable is done with
//! [`take_from`](generic::StaticVec::take_from) and
//! [`move_from`](generic::StaticVec::move_from):
//! ```rust
//! # use static_vec::StaticVec;
//! let mut a: StaticVec<String, 4> = StaticVec::new();
//! a.push("moved".to_string());
//!
//! let b = StaticVec::take_from(&mut a);
//! assert!(a.is_empty());
//! assert_eq!(b, ["moved"]);
//! ```
//!
//! ## Length formats
//!
//! The length of the array is stored using a [`generic::Meta`] format.
//! The [`wide`] format (used by the top-level re-exports) stores it in a `usize`.
//! The [`lean`] format stores it in a `u16` to save space when elements are small.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the error types
//!   and comparisons with `Vec` and `String`.
//! - `serde`: implements `Serialize` and `Deserialize` for `StaticVec` and `StaticString`.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod error;
pub mod raw;
pub mod generic;
pub mod string;
pub mod wide;
pub mod lean;
#[cfg(feature = "serde")]
mod serde;

pub use error::CapacityError;
pub use generic::IntoIter;
pub use string::FromUtf8Error;
pub use wide::{
	StaticVec,
	StaticString
};
