//! Map model, collision mask and wire records for tilespace.
//!
//! This crate ties the byte-grid primitives from `grid` to the domain of
//! a virtual-space map: a [`CollisionMask`] of claim counts, [`MapObject`]s
//! whose footprints claim and release mask tiles, and a [`MapModel`] that
//! owns both and round-trips the service's JSON wire format.
//!
//! # Design Principles
//!
//! - **One owner** - A map, its mask and its objects live and die together;
//!   objects never hold back-references, the model splits its borrows.
//! - **Boundary-only encoding** - The Base64 collision blob is decoded once
//!   at load and encoded once at serialization; mutations work on bytes.
//! - **Explicit errors** - Structural violations (bounds, lengths, foreign
//!   objects) fail the operation that detects them and change nothing.
//!
//! # Example
//!
//! ```
//! use model::{MapModel, MapObject};
//!
//! let mut map = MapModel::new("office", 16, 9);
//! map.add_object(MapObject::new("desk", 2, 3, 3, 2)).unwrap();
//! map.set_object_collision(0, true).unwrap();
//! assert!(map.collision().get(4, 4).unwrap());
//!
//! let json = map.to_json().unwrap();
//! let restored = MapModel::from_json(&json).unwrap();
//! assert_eq!(restored.dimensions(), (16, 9));
//! ```

mod error;
mod map;
mod mask;
mod object;
mod wire;

pub use error::{ModelError, ModelResult};
pub use map::{MapMeta, MapModel};
pub use mask::CollisionMask;
pub use object::{MapObject, SoundProperties};
pub use wire::{MapRecord, ObjectRecord};

pub use grid::{GridError, GridResult};
