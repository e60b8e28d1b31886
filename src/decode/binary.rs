use crate::core::{
    bit_coder::{ByteReader, ReaderErr},
    shared::Portable,
    triangle::{Material, ModelTriangle, RenderState, VertexTex2},
};

/// Reads one triangle of the current binary format. Fields are taken as stored.
pub(crate) fn read_triangle<R>(reader: &mut R) -> Result<ModelTriangle, ReaderErr>
    where R: ByteReader
{
    Ok(ModelTriangle {
        p1: VertexTex2::read_from(reader)?,
        p2: VertexTex2::read_from(reader)?,
        p3: VertexTex2::read_from(reader)?,
        material: Material::read_from(reader)?,
        tex1_name: reader.read_string_u8()?,
        tex2_name: reader.read_string_u8()?,
        variable_tex2: reader.read_bool()?,
        min: reader.read_f32()?,
        max: reader.read_f32()?,
        state: RenderState::from_bits(reader.read_u32()?),
    })
}
