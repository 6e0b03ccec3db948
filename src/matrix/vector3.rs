//! 3D Cartesian vectors.
//!
//! Vectors are the workhorses of this crate. Whether you are measuring the
//! separation between two points, reflecting a direction across an axis, or
//! pushing a position through a transform matrix, you're working with 3D
//! vectors under the hood.
//!
//! # Value Semantics
//!
//! [`Vector3`] is a plain `Copy` value type. No operation mutates its
//! receiver; every arithmetic and geometric method returns a new vector.
//! This makes instances freely shareable across threads with no coordination.
//!
//! ```
//! use cartesian3d::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! let sum = a + b;
//! assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));
//! // `a` and `b` are untouched:
//! assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
//! ```
//!
//! # Scalar Operands
//!
//! Addition, subtraction, and scaling accept a bare `f64` on either side.
//! A scalar is applied uniformly to all three components:
//!
//! ```
//! use cartesian3d::Vector3;
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! assert_eq!(v + 1.0, Vector3::new(2.0, 3.0, 4.0));
//! assert_eq!(1.0 + v, v + 1.0);           // scalar addition commutes
//! assert_eq!(10.0 - v, -(v - 10.0));      // reversed subtraction negates
//! assert_eq!(2.0 * v, v * 2.0);           // scaling commutes
//! ```
//!
//! Operand kinds are resolved statically: anything that is neither a
//! [`Vector3`] nor an `f64` is rejected at compile time.
//!
//! # Dot and Cross Products
//!
//! - **Dot product**: For unit vectors, `a.dot(&b)` equals `cos(θ)` where θ
//!   is the angle between them. [`angle_between`](Vector3::angle_between)
//!   builds on this.
//!
//! - **Cross product**: The result is perpendicular to both inputs, with
//!   direction given by the right-hand rule.
//!
//! ```
//! use cartesian3d::Vector3;
//!
//! let x = Vector3::x_axis();
//! let y = Vector3::y_axis();
//!
//! assert_eq!(x.dot(&y), 0.0);             // perpendicular
//! assert_eq!(x.cross(&y), Vector3::z_axis());
//! ```
//!
//! # NaN and Infinity
//!
//! Components are not checked for finiteness. Feeding NaN or ±∞ into any
//! operation propagates it through the result.
use crate::errors::{GeomError, GeomResult, MathErrorKind};
use crate::matrix::Matrix3;
use std::fmt;

/// A 3D Cartesian vector.
///
/// Represents a point or direction in 3-space and provides closed-form
/// vector algebra: component-wise arithmetic, dot/cross products, length
/// and distance measures, and matrix transforms.
///
/// # Fields
///
/// Components are public for direct access when performance matters:
/// `x`, `y`, and `z`, each an `f64`.
///
/// # Construction
///
/// ```
/// use cartesian3d::Vector3;
///
/// // Direct construction
/// let v = Vector3::new(1.0, 2.0, 3.0);
///
/// // Unit vectors along axes
/// let x = Vector3::x_axis();
///
/// // From an array
/// let v = Vector3::from_array([1.0, 2.0, 3.0]);
///
/// // From a runtime-sized slice (length-checked)
/// let v = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// ```
///
/// Equality is field-wise `f64` comparison. Two vectors are equal exactly
/// when all three component pairs are equal; use a tolerance comparison on
/// [`distance_to`](Self::distance_to) for approximate matching.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Creates a vector from a slice of exactly three elements.
    ///
    /// This is the length-checked entry point for callers holding
    /// runtime-sized numeric data. Returns a
    /// [`ShapeError`](GeomError::ShapeError) if the slice length is not 3.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let v = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    ///
    /// assert!(Vector3::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(slice: &[f64]) -> GeomResult<Self> {
        if slice.len() != 3 {
            return Err(GeomError::shape_error(
                "Vector3::from_slice",
                3,
                slice.len(),
            ));
        }
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }

    /// Returns the components as an `(x, y, z)` tuple.
    #[inline]
    pub fn components(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> GeomResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeomError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    ///
    /// For a unit vector, this returns 1.0. For the zero vector, returns 0.0.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths or don't need the actual distance.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// Fails with [`MathErrorKind::DivisionByZero`] when the vector has zero
    /// magnitude, since the zero vector carries no direction.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// let unit = v.normalize().unwrap();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// assert!(Vector3::zeros().normalize().is_err());
    /// ```
    pub fn normalize(&self) -> GeomResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(GeomError::math_error(
                "Vector3::normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize a zero-magnitude vector",
            ));
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both input vectors, with direction
    /// given by the right-hand rule. The magnitude equals `|a||b|sin(θ)`.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let x = Vector3::x_axis();
    /// let y = Vector3::y_axis();
    /// assert_eq!(x.cross(&y), Vector3::z_axis());  // X × Y = Z
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the Euclidean distance to another vector.
    ///
    /// Equivalent to `(*self - *other).magnitude()`.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let a = Vector3::new(1.0, 1.0, 0.0);
    /// let b = Vector3::new(4.0, 5.0, 0.0);
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// assert_eq!(a.distance_to(&a), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        libm::sqrt(dx * dx + dy * dy + dz * dz)
    }

    /// Computes the angle between this vector and another, in radians.
    ///
    /// The result lies in `[0, π]`. Rounding can push the cosine ratio just
    /// outside `[-1, 1]`, so it is clamped before the arccosine.
    ///
    /// Fails with [`MathErrorKind::DivisionByZero`] when either vector has
    /// zero magnitude, since the angle is undefined there.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let x = Vector3::x_axis();
    /// let y = Vector3::y_axis();
    /// let angle = x.angle_between(&y).unwrap();
    /// assert!((angle - FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn angle_between(&self, other: &Self) -> GeomResult<f64> {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return Err(GeomError::math_error(
                "Vector3::angle_between",
                MathErrorKind::DivisionByZero,
                "angle is undefined for a zero-magnitude vector",
            ));
        }
        let cos_angle = (self.dot(other) / denom).clamp(-1.0, 1.0);
        Ok(libm::acos(cos_angle))
    }

    /// Reflects this vector over another.
    ///
    /// Computes `2·(self·other / |other|)·other − self`. For a unit-length
    /// `other` this is the mirror image of `self` across the line spanned by
    /// `other`:
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 0.0);
    /// let mirrored = v.reflect_over(&Vector3::x_axis()).unwrap();
    /// assert_eq!(mirrored, Vector3::new(1.0, -2.0, 0.0));
    /// ```
    ///
    /// Fails with [`MathErrorKind::DivisionByZero`] when `other` has zero
    /// magnitude.
    pub fn reflect_over(&self, other: &Self) -> GeomResult<Self> {
        let mag = other.magnitude();
        if mag == 0.0 {
            return Err(GeomError::math_error(
                "Vector3::reflect_over",
                MathErrorKind::DivisionByZero,
                "cannot reflect over a zero-magnitude vector",
            ));
        }
        Ok(*other * (2.0 * self.dot(other) / mag) - *self)
    }

    /// Multiplies this vector by a 3x3 matrix using the row-vector
    /// convention.
    ///
    /// Computes `[x, y, z] · M`: component `j` of the result is
    /// `x·m[0][j] + y·m[1][j] + z·m[2][j]`. Also available as the `*`
    /// operator: `v * matrix`.
    ///
    /// ```
    /// use cartesian3d::{Matrix3, Vector3};
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.transform(&Matrix3::identity()), v);
    /// ```
    pub fn transform(&self, matrix: &Matrix3) -> Self {
        let m = matrix.elements();
        Self::new(
            self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0],
            self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1],
            self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2],
        )
    }

    /// Rotates this vector about its local x, y, and z axes.
    ///
    /// `angles` holds the three rotation amounts in radians, applied as a
    /// single combined Euler matrix (see
    /// [`Matrix3::from_euler_angles`]) via the row-vector product. The axes
    /// are the vector's own local axes, not the fixed global frame.
    ///
    /// ```
    /// use cartesian3d::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.rotate([0.0, 0.0, 0.0]), v);
    /// ```
    pub fn rotate(&self, angles: [f64; 3]) -> Self {
        self.transform(&Matrix3::from_euler_angles(angles[0], angles[1], angles[2]))
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector + scalar (applied to all three components)
impl std::ops::Add<f64> for Vector3 {
    type Output = Self;

    fn add(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }
}

/// scalar + Vector
impl std::ops::Add<Vector3> for f64 {
    type Output = Vector3;

    fn add(self, vec: Vector3) -> Vector3 {
        vec + self
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector - scalar (applied to all three components)
impl std::ops::Sub<f64> for Vector3 {
    type Output = Self;

    fn sub(self, scalar: f64) -> Self {
        Self::new(self.x - scalar, self.y - scalar, self.z - scalar)
    }
}

/// scalar - Vector (component-wise `scalar - v`, the negation of `v - scalar`)
impl std::ops::Sub<Vector3> for f64 {
    type Output = Vector3;

    fn sub(self, vec: Vector3) -> Vector3 {
        Vector3::new(self - vec.x, self - vec.y, self - vec.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
