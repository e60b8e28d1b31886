use nd_vector::impl_ndvector_ops;

use crate::core::bit_coder::{ByteReader, ByteWriter, ReaderErr};

use std::fmt;

pub trait ConfigType {
    fn default()-> Self;
}

/// Fixed-size vector of `N` components.
#[derive(Clone, Copy)]
pub struct NdVector<const N: usize, T> {
    data: [T; N],
}

pub type Vector2 = NdVector<2, f32>;
pub type Vector3 = NdVector<3, f32>;

/// RGBA colour.
pub type Color = NdVector<4, f32>;

impl<const N: usize, T> NdVector<N, T> {
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<const N: usize> NdVector<N, f32> {
    pub fn zero() -> Self {
        NdVector { data: [0.0; N] }
    }

    pub fn norm(self) -> f32 {
        self.data.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    /// Returns the unit vector in the same direction. A zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self;
        }
        let mut out = self;
        for c in out.data.iter_mut() {
            *c /= norm;
        }
        out
    }
}

impl<const N: usize> Default for NdVector<N, f32> {
    fn default() -> Self {
        Self::zero()
    }
}

impl NdVector<3, f32> {
    #[inline]
    pub fn x(&self) -> f32 { self.data[0] }
    #[inline]
    pub fn y(&self) -> f32 { self.data[1] }
    #[inline]
    pub fn z(&self) -> f32 { self.data[2] }
}

impl<const N: usize, T> From<[T;N]> for NdVector<N, T> {
    fn from(data: [T;N]) -> Self {
        NdVector { data }
    }
}

impl<const N: usize, T> fmt::Debug for NdVector<N, T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}


pub trait Dot {
    type Product;
    fn dot(self, other: Self) -> Self::Product;
}

pub trait Cross {
    fn cross(self, other: Self) -> Self;
}

/// Fixed-width little-endian binary form of a value.
pub trait Portable: Sized {
    fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter;

    fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader;
}

impl_ndvector_ops!(4);

impl Cross for NdVector<3, f32> {
    fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        NdVector {
            data: [
                ay * bz - az * by,
                az * bx - ax * bz,
                ax * by - ay * bx,
            ]
        }
    }
}

/// Unit normal of the plane through `p1`, `p2` and `p3`, i.e. `(p3 - p1) x (p2 - p1)` normalized.
pub fn normal_to_plane(p1: Vector3, p2: Vector3, p3: Vector3) -> Vector3 {
    let u = p3 - p1;
    let v = p2 - p1;
    u.cross(v).normalize()
}
