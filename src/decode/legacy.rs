//! The three deprecated binary triangle layouts.
//!
//! Every layout starts with four bytes of editor flags (`used`, `selected`
//! and two bytes of padding) which carry no model data.

use crate::core::{
    bit_coder::{ByteReader, ReaderErr},
    shared::Portable,
    triangle::{Material, ModelTriangle, RenderState, Vertex, VertexTex2},
};
use crate::shared::{
    header::{LegacyHeader, LEGACY_TEXTURE_NAME_LEN},
    texture,
};

#[enum_dispatch::enum_dispatch(LegacyTriangleDecoder)]
#[derive(Debug)]
pub(crate) enum LegacyLayout {
    Layout1(Layout1),
    Layout2(Layout2),
    Layout3(Layout3),
}

impl LegacyLayout {
    pub(crate) fn from_header(header: &LegacyHeader) -> Self {
        match (header.revision, header.version) {
            (1, 0) => Layout1.into(),
            (1, 1) => Layout2.into(),
            _ => Layout3.into(),
        }
    }
}

#[enum_dispatch::enum_dispatch]
pub(crate) trait LegacyTriangleDecoder {
    /// Reads one triangle record, applying the rules particular to this layout.
    fn read_triangle<R>(&self, reader: &mut R) -> Result<ModelTriangle, ReaderErr>
        where R: ByteReader;
}

/// Reads one record and brings its texture names up to date.
pub(crate) fn decode_triangle<R>(layout: &LegacyLayout, reader: &mut R) -> Result<ModelTriangle, ReaderErr>
    where R: ByteReader
{
    let mut triangle = layout.read_triangle(reader)?;
    triangle.tex1_name = texture::normalize_extension(&triangle.tex1_name);
    triangle.tex2_name = texture::normalize_extension(&triangle.tex2_name);
    Ok(triangle)
}

fn skip_flags<R: ByteReader>(reader: &mut R) -> Result<(), ReaderErr> {
    reader.read_array::<4>()?;
    Ok(())
}

fn skip_i16<R: ByteReader>(reader: &mut R, count: usize) -> Result<(), ReaderErr> {
    for _ in 0..count {
        reader.read_i16()?;
    }
    Ok(())
}

/// Revision 1, version 0: single-texture vertices, no render state.
#[derive(Debug)]
pub(crate) struct Layout1;

impl LegacyTriangleDecoder for Layout1 {
    fn read_triangle<R>(&self, reader: &mut R) -> Result<ModelTriangle, ReaderErr>
        where R: ByteReader
    {
        skip_flags(reader)?;
        let p1 = Vertex::read_from(reader)?;
        let p2 = Vertex::read_from(reader)?;
        let p3 = Vertex::read_from(reader)?;
        let material = Material::read_legacy_from(reader)?;
        let tex1_name = reader.read_fixed_str::<LEGACY_TEXTURE_NAME_LEN>()?;
        let min = reader.read_f32()?;
        let max = reader.read_f32()?;

        Ok(ModelTriangle {
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
            material,
            tex1_name,
            min,
            max,
            ..Default::default()
        })
    }
}

/// Revision 1, version 1: adds the render state.
#[derive(Debug)]
pub(crate) struct Layout2;

impl LegacyTriangleDecoder for Layout2 {
    fn read_triangle<R>(&self, reader: &mut R) -> Result<ModelTriangle, ReaderErr>
        where R: ByteReader
    {
        let mut triangle = Layout1.read_triangle(reader)?;
        triangle.state = RenderState::from_bits(reader.read_i32()? as u32);
        skip_i16(reader, 4)?;
        Ok(triangle)
    }
}

/// Every other (revision, version) pair: dual-texture vertices and a
/// secondary texture index from which flags and the texture name are inferred.
#[derive(Debug)]
pub(crate) struct Layout3;

impl LegacyTriangleDecoder for Layout3 {
    fn read_triangle<R>(&self, reader: &mut R) -> Result<ModelTriangle, ReaderErr>
        where R: ByteReader
    {
        skip_flags(reader)?;
        let p1 = VertexTex2::read_from(reader)?;
        let p2 = VertexTex2::read_from(reader)?;
        let p3 = VertexTex2::read_from(reader)?;
        let material = Material::read_legacy_from(reader)?;
        let tex1_name = reader.read_fixed_str::<LEGACY_TEXTURE_NAME_LEN>()?;
        let min = reader.read_f32()?;
        let max = reader.read_f32()?;
        let mut state = RenderState::from_bits(reader.read_i32()? as u32);
        let tex_num2 = reader.read_i16()? as i32;
        skip_i16(reader, 3)?;

        let variable_tex2 = tex_num2 == 1;
        if tex1_name == texture::ALPHA_TEXTURE {
            state |= RenderState::ALPHA;
        }

        let mut tex2_name = String::new();
        if !variable_tex2 && tex_num2 != 0 {
            state |= texture::secondary_state(tex_num2);
            tex2_name = texture::dirty_texture_name(tex_num2);
        }

        Ok(ModelTriangle {
            p1,
            p2,
            p3,
            material,
            tex1_name,
            tex2_name,
            variable_tex2,
            min,
            max,
            state,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bit_coder::ByteWriter;

    fn header(revision: i32, version: i32) -> LegacyHeader {
        LegacyHeader { revision, version, total_triangles: 1, reserved: [0; 10] }
    }

    #[test]
    fn test_layout_selection() {
        assert!(matches!(LegacyLayout::from_header(&header(1, 0)), LegacyLayout::Layout1(_)));
        assert!(matches!(LegacyLayout::from_header(&header(1, 1)), LegacyLayout::Layout2(_)));
        assert!(matches!(LegacyLayout::from_header(&header(1, 2)), LegacyLayout::Layout3(_)));
        assert!(matches!(LegacyLayout::from_header(&header(2, 0)), LegacyLayout::Layout3(_)));
        assert!(matches!(LegacyLayout::from_header(&header(0, 0)), LegacyLayout::Layout3(_)));
    }

    fn layout3_record(tex1: &str, state: i32, tex_num2: i16) -> Vec<u8> {
        let mut buffer = vec![1, 0, 0, 0];
        for _ in 0..3 {
            VertexTex2::default().write_to(&mut buffer);
        }
        Material::default().write_legacy_to(&mut buffer);
        buffer.write_fixed_str::<LEGACY_TEXTURE_NAME_LEN>(tex1);
        buffer.write_f32(0.0);
        buffer.write_f32(100.0);
        buffer.write_i32(state);
        buffer.write_i16(tex_num2);
        for _ in 0..3 {
            buffer.write_i16(0);
        }
        buffer
    }

    #[test]
    fn test_layout3_record_size() {
        assert_eq!(layout3_record("a", 0, 0).len(), 4 + 3 * 40 + 17 * 4 + 20 + 8 + 4 + 2 + 6);
    }

    #[test]
    fn test_layout3_inference() {
        let decode = |tex1: &str, state: i32, n: i16| {
            let mut reader = layout3_record(tex1, state, n).into_iter();
            let t = decode_triangle(&Layout3.into(), &mut reader).unwrap();
            assert_eq!(reader.len(), 0);
            t
        };

        let t = decode("wall.tga", 0, 0);
        assert_eq!(t.tex1_name, "wall.png");
        assert_eq!(t.tex2_name, "");
        assert!(!t.variable_tex2);
        assert_eq!(t.state, RenderState::NORMAL);

        let t = decode("wall.png", 0, 1);
        assert!(t.variable_tex2);
        assert_eq!(t.tex2_name, "");
        assert_eq!(t.state, RenderState::NORMAL);

        let t = decode("wall.png", 0, 5);
        assert_eq!(t.tex2_name, "dirty05.png");
        assert_eq!(t.state, RenderState::DUAL_BLACK);

        let t = decode("wall.png", RenderState::TWO_FACE.bits() as i32, 15);
        assert_eq!(t.tex2_name, "dirty15.png");
        assert_eq!(t.state, RenderState::TWO_FACE | RenderState::DUAL_WHITE);

        let t = decode("wall.png", 0, 25);
        assert_eq!(t.tex2_name, "dirty25.png");
        assert_eq!(t.state, RenderState::NORMAL);

        let t = decode("plant.png", 0, 0);
        assert_eq!(t.state, RenderState::ALPHA);

        // the alpha rule looks at the stored name, before extension migration
        let t = decode("plant.bmp", 0, 0);
        assert_eq!(t.tex1_name, "plant.png");
        assert_eq!(t.state, RenderState::NORMAL);
    }

    #[test]
    fn test_truncated_record() {
        let mut record = layout3_record("a.png", 0, 0);
        record.truncate(50);
        let mut reader = record.into_iter();
        assert_eq!(
            decode_triangle(&Layout3.into(), &mut reader),
            Err(ReaderErr::NotEnoughData)
        );
    }
}
