//! Matriz: dense matrix arithmetic with delimited text I/O in pure Rust.
//!
//! Matriz provides a double-precision matrix value type with elementwise
//! arithmetic, scalar scaling, transposition and matrix multiplication,
//! plus a plain-text serialization format with a configurable delimiter
//! and structural dimension inference.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![
//!     1.0, 2.0,
//!     3.0, 4.0,
//! ]).unwrap();
//! let eye = Matrix::eye(2).unwrap();
//!
//! // Multiplying by the identity is neutral
//! let product = a.matmul(&eye).unwrap();
//! assert_eq!(product, a);
//!
//! // Elementwise arithmetic and scaling
//! let doubled = a.add(&a).unwrap();
//! assert_eq!(doubled, a.mul_scalar(2.0));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core Matrix type and its operations
//! - [`serialization`]: delimited text format detection, parsing, writing
//! - [`error`]: the error enumeration and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod serialization;
