//! Core types for the vecbench micro-benchmark suite.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Vector`] data model that the benchmarks measure, uniform random
//! sampling of vectors and scalars, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod sample;
pub mod vector;

pub use error::VectorError;
pub use sample::{uniform_scalar, uniform_vector, UniformRange};
pub use vector::Vector;
