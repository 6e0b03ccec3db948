//! 3D Cartesian vector algebra.
//!
//! This crate provides a small, self-contained 3D vector value type with
//! operator-style arithmetic, the standard geometric operations, and linear
//! transforms through 3x3 matrices:
//!
//! - **Arithmetic**: addition, subtraction, negation, and scaling, with
//!   scalar operands accepted on either side of the operator.
//! - **Geometry**: dot and cross products, magnitude, normalization,
//!   Euclidean distance, the angle between two vectors, and reflection of
//!   one vector over another.
//! - **Linear transforms**: row-vector matrix multiplication and rotation
//!   through a combined Euler matrix built from three per-axis angles.
//!
//! # Quick Start
//!
//! ```
//! use cartesian3d::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a.dot(&b), 32.0);
//! assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
//!
//! let unit = a.cross(&b).normalize().unwrap();
//! assert!((unit.magnitude() - 1.0).abs() < 1e-15);
//! ```
//!
//! # Transforms
//!
//! Matrix application follows the row-vector convention, `[x, y, z] · M`:
//!
//! ```
//! use cartesian3d::{Matrix3, Vector3};
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//!
//! // General 3x3 transform
//! let m = Matrix3::identity();
//! assert_eq!(v * m, v);
//!
//! // Rotation about the vector's local axes, in radians
//! let rotated = v.rotate([0.1, 0.2, 0.3]);
//! assert_eq!(rotated, v.transform(&Matrix3::from_euler_angles(0.1, 0.2, 0.3)));
//! ```
//!
//! # Error Handling
//!
//! Operations that divide by a magnitude ([`Vector3::normalize`],
//! [`Vector3::angle_between`], [`Vector3::reflect_over`]) return
//! [`GeomResult`] and fail explicitly on zero-magnitude operands rather than
//! yielding NaN. Slice-based constructors ([`Vector3::from_slice`],
//! [`Matrix3::from_slice`]) fail on any length other than the required fixed
//! dimensionality. Everything else is infallible: operand kinds are fixed by
//! the type system, and shapes are fixed by array types.
//!
//! # Cargo Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Vector3`] and
//!   [`Matrix3`].

pub mod constants;
pub mod errors;
pub mod matrix;

pub use errors::{GeomError, GeomResult, MathErrorKind};
pub use matrix::{Matrix3, Vector3};
