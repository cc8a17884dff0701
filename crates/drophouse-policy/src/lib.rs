//! Policy-plane move codec.
//!
//! Maps moves onto the 81x8x8 policy tensor of a crazyhouse network and back,
//! and builds the per-label static table consumed by training and inference.

pub mod coordinate;
pub mod decode;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod plane;
pub mod resolve;
pub mod static_table;
pub mod table;
pub mod vector;

pub use coordinate::{FlatIndex, POLICY_SIZE, PolicyCoordinate};
pub use decode::{decode, decode_index};
pub use error::{DecodeError, EncodeError, GeometryFault, TableError};
pub use geometry::BoardShape;
pub use labels::{CRAZYHOUSE_LABEL_COUNT, crazyhouse_labels, crazyhouse_moves};
pub use plane::{PLANE_COUNT, PlaneCategory};
pub use resolve::{encode, resolve};
pub use static_table::FLAT_PLANE_IDX;
pub use table::PolicyTable;
pub use vector::MoveVector;
