use std::ops;

use crate::core::{
    bit_coder::{ByteReader, ByteWriter, ReaderErr},
    shared::{Color, Portable, Vector2, Vector3},
};

/// Vertex with a single texture coordinate, as stored by the oldest layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub coord: Vector3,
    pub normal: Vector3,
    pub tex_coord: Vector2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VertexTex2 {
    pub coord: Vector3,
    pub normal: Vector3,
    pub tex_coord: Vector2,
    pub tex_coord2: Vector2,
}

impl VertexTex2 {
    pub fn new(coord: Vector3, normal: Vector3) -> Self {
        Self { coord, normal, ..Default::default() }
    }
}

impl From<Vertex> for VertexTex2 {
    fn from(v: Vertex) -> Self {
        Self {
            coord: v.coord,
            normal: v.normal,
            tex_coord: v.tex_coord,
            tex_coord2: Vector2::zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub ambient: Color,
    pub specular: Color,
}

impl Material {
    /// Number of floats following the live colours in legacy files
    /// (emissive colour and specular power).
    const LEGACY_DEAD_FLOATS: usize = 5;

    pub fn read_legacy_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        let material = Self::read_from(reader)?;
        for _ in 0..Self::LEGACY_DEAD_FLOATS {
            reader.read_f32()?;
        }
        Ok(material)
    }

    pub fn write_legacy_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        self.write_to(writer);
        for _ in 0..Self::LEGACY_DEAD_FLOATS {
            writer.write_f32(0.0);
        }
    }
}

impl Portable for Vertex {
    fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        self.coord.write_to(writer);
        self.normal.write_to(writer);
        self.tex_coord.write_to(writer);
    }

    fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        Ok(Self {
            coord: Vector3::read_from(reader)?,
            normal: Vector3::read_from(reader)?,
            tex_coord: Vector2::read_from(reader)?,
        })
    }
}

impl Portable for VertexTex2 {
    fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        self.coord.write_to(writer);
        self.normal.write_to(writer);
        self.tex_coord.write_to(writer);
        self.tex_coord2.write_to(writer);
    }

    fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        Ok(Self {
            coord: Vector3::read_from(reader)?,
            normal: Vector3::read_from(reader)?,
            tex_coord: Vector2::read_from(reader)?,
            tex_coord2: Vector2::read_from(reader)?,
        })
    }
}

impl Portable for Material {
    fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        self.diffuse.write_to(writer);
        self.ambient.write_to(writer);
        self.specular.write_to(writer);
    }

    fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        Ok(Self {
            diffuse: Color::read_from(reader)?,
            ambient: Color::read_from(reader)?,
            specular: Color::read_from(reader)?,
        })
    }
}


/// Render-state bitmask. Bit assignments are shared with the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderState(u32);

impl RenderState {
    pub const NORMAL: Self = Self(0);
    pub const TTEXTURE_BLACK: Self = Self(1 << 0);
    pub const TTEXTURE_WHITE: Self = Self(1 << 1);
    pub const TTEXTURE_DIFFUSE: Self = Self(1 << 2);
    pub const WRAP: Self = Self(1 << 3);
    pub const CLAMP: Self = Self(1 << 4);
    pub const LIGHT: Self = Self(1 << 5);
    pub const DUAL_BLACK: Self = Self(1 << 6);
    pub const DUAL_WHITE: Self = Self(1 << 7);
    pub const PART1: Self = Self(1 << 8);
    pub const PART2: Self = Self(1 << 9);
    pub const PART3: Self = Self(1 << 10);
    pub const PART4: Self = Self(1 << 11);
    pub const TWO_FACE: Self = Self(1 << 12);
    pub const ALPHA: Self = Self(1 << 13);
    pub const SECOND: Self = Self(1 << 14);
    pub const FOG: Self = Self(1 << 15);
    pub const TCOLOR_BLACK: Self = Self(1 << 16);
    pub const TCOLOR_WHITE: Self = Self(1 << 17);
    pub const TEXT: Self = Self(1 << 18);
    pub const OPAQUE_TEXTURE: Self = Self(1 << 19);
    pub const OPAQUE_COLOR: Self = Self(1 << 20);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for RenderState {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for RenderState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}


/// A single triangle with everything needed to render it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelTriangle {
    pub p1: VertexTex2,
    pub p2: VertexTex2,
    pub p3: VertexTex2,
    pub material: Material,
    pub tex1_name: String,
    /// May be empty.
    pub tex2_name: String,
    /// The secondary texture is chosen by the engine when the object is built.
    pub variable_tex2: bool,
    pub min: f32,
    pub max: f32,
    pub state: RenderState,
}

impl ModelTriangle {
    pub fn get_vertices(&self) -> [&VertexTex2; 3] {
        [&self.p1, &self.p2, &self.p3]
    }

    pub(crate) fn get_vertices_mut(&mut self) -> [&mut VertexTex2; 3] {
        [&mut self.p1, &mut self.p2, &mut self.p3]
    }
}
