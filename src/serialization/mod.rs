//! Matrix serialization module.
//!
//! Implements the delimited plain-text format:
//! ```text
//! 1.000000;0.000000;0.000000
//! 0.000000;1.000000;0.000000
//! 0.000000;0.000000;1.000000
//! ```
//! One line per matrix row; values within a row separated by a single
//! configurable one-character delimiter; each value fixed-point with six
//! fractional digits. There is no header and no dimension prefix —
//! dimensions are inferred structurally by [`delimited::detect`] and the
//! two-pass scan in [`Matrix::from_delimited_file`]. A trailing blank
//! line is tolerated as an end marker but not required.
//!
//! Example:
//! ```rust
//! use matriz::primitives::Matrix;
//!
//! let path = std::env::temp_dir().join("matriz_doc_roundtrip.txt");
//! let eye = Matrix::eye(3).unwrap();
//!
//! eye.to_delimited_file(&path, ';').unwrap();
//! let loaded = Matrix::from_delimited_file(&path, ';').unwrap();
//! assert_eq!(loaded, eye);
//! # std::fs::remove_file(&path).ok();
//! ```
//!
//! [`Matrix::from_delimited_file`]: crate::primitives::Matrix::from_delimited_file

pub mod delimited;

pub use delimited::detect;
