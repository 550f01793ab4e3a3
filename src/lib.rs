//! This crate is my collection of worked examples for the common time complexity classes, plus a
//! singly linked list and a few interview-style exercises.
//!
//! # Purpose
//! This repo / crate is something I'm working through as a learning experience, with no
//! expectation for it to be used in production. Writing each of these algorithms out by hand helps
//! me to understand why they cost what they cost, which reading a table of Big-O notation never
//! quite did.
//!
//! # Layout
//! - [`complexity`] has one module per class, from [`O(1)`](complexity::constant) to
//!   [`O(n!)`](complexity::factorial), each with a handful of textbook algorithms and a `demo`
//!   function that runs them on small inputs and narrates the results. With the `timing` feature,
//!   [`complexity::timing`] measures one algorithm from each class against growing inputs.
//! - [`collections::linked`] (behind the `linked` feature) holds the linked list, and some
//!   demonstrations of what a reference actually is and what following one costs.
//! - [`exercises`] has the short interview problems: two sum, palindromes, reversing and friends.
//! - [`currency`] formats a payment for a few different countries.
//!
//! The `complexity-primer` binary runs any of the demos, see `complexity-primer --help`.
//!
//! # Error Handling
//! The algorithms here mostly return [`Option`]s and [`Result`]s rather than panicking when there
//! is no sensible answer, like the maximum of an empty slice. The errors are strongly typed, using
//! enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! The [`LinkedList`](collections::linked::LinkedList) follows the standard library's lead instead:
//! indexing methods panic on a bad index, and every one of them has a `try_` version that returns
//! the error.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Diagnostics go through `log`, the binary parses its arguments with
//! `clap` and the timing comparison uses `rand` for its input.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod collections;
pub mod complexity;
pub mod currency;
pub mod exercises;

pub(crate) mod util;
