//! Byte-grid primitives and the collision blob codec for tilespace.
//!
//! This crate provides [`ByteGrid`] for bounds-checked 2-D cell access and
//! the [`blob`] codec that converts between raw cell buffers and the
//! text-safe wire encoding used by the remote map service.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All cell accesses are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about maps, objects,
//!   or collision semantics; it moves bytes.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use grid::{blob, ByteGrid};
//!
//! let mut cells = ByteGrid::new(3, 2);
//! cells.set(2, 1, 1).unwrap();
//!
//! let encoded = blob::encode(cells.cells());
//! let decoded = blob::decode_exact(&encoded, 6).unwrap();
//! assert_eq!(decoded, cells.cells());
//! ```

pub mod blob;
mod error;
mod grid;

pub use error::{GridError, GridResult};
pub use grid::ByteGrid;
