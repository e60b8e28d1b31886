use std::io::BufRead;

use crate::core::{
    text_coder::{self, Err, LineReader},
    triangle::{ModelTriangle, RenderState},
};
use crate::shared::header::ModelHeader;

pub(crate) fn read_header<R: BufRead>(reader: &mut LineReader<R>) -> Result<ModelHeader, Err> {
    let version = reader.read_line_value::<i32>("version")?;
    let total_triangles = reader.read_line_value::<i32>("total_triangles")?;
    Ok(ModelHeader { version, total_triangles })
}

/// Reads one triangle block. Every tag must be present, in order.
pub(crate) fn read_triangle<R: BufRead>(reader: &mut LineReader<R>) -> Result<ModelTriangle, Err> {
    let p1 = text_coder::parse_vertex_tex2(&reader.read_line_string("p1")?)?;
    let p2 = text_coder::parse_vertex_tex2(&reader.read_line_string("p2")?)?;
    let p3 = text_coder::parse_vertex_tex2(&reader.read_line_string("p3")?)?;
    let material = text_coder::parse_material(&reader.read_line_string("mat")?)?;
    let tex1_name = reader.read_line_token("tex1")?;
    let tex2_name = reader.read_line_token("tex2")?;
    // only the first character is significant
    let variable_tex2 = reader.read_line_token("var_tex2")?.starts_with('Y');
    let min = reader.read_line_value::<f32>("min")?;
    let max = reader.read_line_value::<f32>("max")?;
    let state = RenderState::from_bits(reader.read_line_value::<i32>("state")? as u32);

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
