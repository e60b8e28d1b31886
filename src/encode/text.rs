use std::fmt::{self, Write};

use crate::core::{text_coder, triangle::ModelTriangle};
use crate::shared::header::ModelHeader;

pub(crate) fn write_header<W: Write>(header: &ModelHeader, out: &mut W) -> fmt::Result {
    writeln!(out, "# Colobot text model")?;
    writeln!(out)?;
    writeln!(out, "### HEAD")?;
    writeln!(out, "version {}", header.version)?;
    writeln!(out, "total_triangles {}", header.total_triangles)?;
    writeln!(out)?;
    writeln!(out, "### TRIANGLES")
}

pub(crate) fn write_triangle<W: Write>(t: &ModelTriangle, out: &mut W) -> fmt::Result {
    for (tag, vertex) in [("p1", &t.p1), ("p2", &t.p2), ("p3", &t.p3)] {
        write!(out, "{} ", tag)?;
        text_coder::write_vertex_tex2(out, vertex)?;
        writeln!(out)?;
    }
    write!(out, "mat ")?;
    text_coder::write_material(out, &t.material)?;
    writeln!(out)?;
    writeln!(out, "tex1 {}", t.tex1_name)?;
    writeln!(out, "tex2 {}", t.tex2_name)?;
    writeln!(out, "var_tex2 {}", if t.variable_tex2 { 'Y' } else { 'N' })?;
    writeln!(out, "min {}", t.min)?;
    writeln!(out, "max {}", t.max)?;
    writeln!(out, "state {}", t.state.bits() as i32)?;
    writeln!(out)
}
