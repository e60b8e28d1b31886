use std::fmt;

use tracing::debug;

use crate::core::{
    bit_coder::{ByteWriter, WriterErr},
    triangle::ModelTriangle,
};
use crate::shared::header::{LegacyHeader, ModelHeader, CURRENT_VERSION};

mod binary;
mod legacy;
mod text;

/// Encodes the triangles in the newest deprecated binary layout
/// (revision 1, version 2).
pub fn encode_legacy<W>(triangles: &[ModelTriangle], writer: &mut W) -> Result<(), Err>
    where W: ByteWriter
{
    let total_triangles = checked_count(triangles)?;
    debug!("Encoding legacy model: {} triangles", total_triangles);

    LegacyHeader::current(total_triangles).write_to(writer);
    for triangle in triangles {
        legacy::write_triangle(triangle, writer);
    }
    Ok(())
}

/// Encodes the triangles in the current binary format.
pub fn encode_binary<W>(triangles: &[ModelTriangle], writer: &mut W) -> Result<(), Err>
    where W: ByteWriter
{
    let total_triangles = checked_count(triangles)?;
    debug!("Encoding binary model: {} triangles", total_triangles);

    ModelHeader { version: CURRENT_VERSION, total_triangles }.write_to(writer);
    for (index, triangle) in triangles.iter().enumerate() {
        binary::write_triangle(triangle, writer)
            .map_err(|source| Err::TriangleError { index, source })?;
    }
    Ok(())
}

/// Encodes the triangles in the current text format.
pub fn encode_text<W>(triangles: &[ModelTriangle], out: &mut W) -> Result<(), Err>
    where W: fmt::Write
{
    let total_triangles = checked_count(triangles)?;
    debug!("Encoding text model: {} triangles", total_triangles);

    text::write_header(&ModelHeader { version: CURRENT_VERSION, total_triangles }, out)?;
    for triangle in triangles {
        text::write_triangle(triangle, out)?;
    }
    Ok(())
}

fn checked_count(triangles: &[ModelTriangle]) -> Result<i32, Err> {
    if triangles.is_empty() {
        return Err(Err::EmptyModel);
    }
    i32::try_from(triangles.len())
        .map_err(|_| Err::TooManyTriangles(triangles.len()))
}


#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Model has no triangles")]
    EmptyModel,
    #[error("Text formatting error")]
    FormatError(#[from] fmt::Error),
    #[error("{0} triangles do not fit the triangle count field")]
    TooManyTriangles(usize),
    #[error("Error in triangle {index}: {source}")]
    TriangleError { index: usize, source: WriterErr },
}
