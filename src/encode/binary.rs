use crate::core::{
    bit_coder::{ByteWriter, WriterErr},
    shared::Portable,
    triangle::ModelTriangle,
};

pub(crate) fn write_triangle<W>(t: &ModelTriangle, writer: &mut W) -> Result<(), WriterErr>
    where W: ByteWriter
{
    t.p1.write_to(writer);
    t.p2.write_to(writer);
    t.p3.write_to(writer);
    t.material.write_to(writer);
    writer.write_string_u8(&t.tex1_name)?;
    writer.write_string_u8(&t.tex2_name)?;
    writer.write_bool(t.variable_tex2);
    writer.write_f32(t.min);
    writer.write_f32(t.max);
    writer.write_u32(t.state.bits());
    Ok(())
}
