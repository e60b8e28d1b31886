use crate::core::{
    bit_coder::ByteWriter,
    shared::Portable,
    triangle::ModelTriangle,
};
use crate::shared::{header::LEGACY_TEXTURE_NAME_LEN, texture};

/// Writes one triangle in the revision 1, version 2 layout.
/// The primary texture name is cut to the width of its field.
pub(crate) fn write_triangle<W>(t: &ModelTriangle, writer: &mut W)
    where W: ByteWriter
{
    // used, selected, padding
    writer.write_bytes(&[1, 0, 0, 0]);

    t.p1.write_to(writer);
    t.p2.write_to(writer);
    t.p3.write_to(writer);
    t.material.write_legacy_to(writer);
    writer.write_fixed_str::<LEGACY_TEXTURE_NAME_LEN>(&t.tex1_name);
    writer.write_f32(t.min);
    writer.write_f32(t.max);
    writer.write_i32(t.state.bits() as i32);

    let tex_num2 = if t.variable_tex2 {
        1
    } else {
        texture::dirty_texture_index(&t.tex2_name)
    };
    writer.write_i16(tex_num2 as i16);

    for _ in 0..3 {
        writer.write_i16(0);
    }
}
