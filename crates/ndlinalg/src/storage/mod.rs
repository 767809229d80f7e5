//! Storage for tensor data.
//!
//! A tensor owns exactly one flat buffer. Shape and strides live on the
//! [`Tensor`](crate::Tensor) wrapper; the buffer only knows its cells.

mod dense;

pub use dense::Dense;
