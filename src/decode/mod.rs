use tracing::{debug, trace};

use crate::core::{
    bit_coder::{ByteReader, ReaderErr},
    shared::ConfigType,
    text_coder,
    triangle::ModelTriangle,
};
use crate::shared::header::{LegacyHeader, ModelHeader, CURRENT_VERSION};

mod binary;
mod legacy;
mod text;

/// Decodes a model stored in one of the deprecated binary layouts.
/// Texture names and render states are migrated to their current form.
pub fn decode_legacy<R>(reader: &mut R, cfg: &Config) -> Result<Vec<ModelTriangle>, Err>
    where R: ByteReader
{
    let header = LegacyHeader::read_from(reader)
        .map_err(Err::HeaderError)?;

    let layout = legacy::LegacyLayout::from_header(&header);
    debug!(
        "Decoding legacy model: revision {}, version {}, {} triangles, {:?}",
        header.revision, header.version, header.total_triangles, layout
    );

    let mut triangles = Vec::with_capacity(cfg.preallocate);
    for index in 0..header.total_triangles.max(0) as usize {
        let triangle = legacy::decode_triangle(&layout, reader)
            .map_err(|source| Err::TriangleError { index, source })?;
        trace_triangle(index, &triangle);
        triangles.push(triangle);
    }
    Ok(triangles)
}

/// Decodes a model in the current binary format.
pub fn decode_binary<R>(reader: &mut R, cfg: &Config) -> Result<Vec<ModelTriangle>, Err>
    where R: ByteReader
{
    let header = ModelHeader::read_from(reader)
        .map_err(Err::HeaderError)?;
    if header.version != CURRENT_VERSION {
        return Err(Err::UnknownVersion(header.version));
    }
    debug!("Decoding binary model: {} triangles", header.total_triangles);

    let mut triangles = Vec::with_capacity(cfg.preallocate);
    for index in 0..header.total_triangles.max(0) as usize {
        let triangle = binary::read_triangle(reader)
            .map_err(|source| Err::TriangleError { index, source })?;
        trace_triangle(index, &triangle);
        triangles.push(triangle);
    }
    Ok(triangles)
}

/// Decodes a model in the current text format.
pub fn decode_text<R>(reader: R, cfg: &Config) -> Result<Vec<ModelTriangle>, Err>
    where R: std::io::BufRead
{
    let mut reader = text_coder::LineReader::new(reader);
    let header = text::read_header(&mut reader)
        .map_err(Err::TextHeaderError)?;
    if header.version != CURRENT_VERSION {
        return Err(Err::UnknownVersion(header.version));
    }
    debug!("Decoding text model: {} triangles", header.total_triangles);

    let mut triangles = Vec::with_capacity(cfg.preallocate);
    for index in 0..header.total_triangles.max(0) as usize {
        let triangle = text::read_triangle(&mut reader)
            .map_err(|source| Err::TextTriangleError { index, source })?;
        trace_triangle(index, &triangle);
        triangles.push(triangle);
    }
    Ok(triangles)
}

fn trace_triangle(index: usize, t: &ModelTriangle) {
    trace!("Triangle {}", index);
    trace!("  p1: {:?}", t.p1);
    trace!("  p2: {:?}", t.p2);
    trace!("  p3: {:?}", t.p3);
    trace!(
        "  material: diffuse {:?}, ambient {:?}, specular {:?}",
        t.material.diffuse, t.material.ambient, t.material.specular
    );
    trace!(
        "  tex1: {:?}, tex2: {}",
        t.tex1_name,
        if t.variable_tex2 { "(variable)".to_string() } else { format!("{:?}", t.tex2_name) }
    );
    trace!("  min: {:.2}, max: {:.2}, state: {:#x}", t.min, t.max, t.state.bits());
}


#[derive(Debug, Clone)]
pub struct Config {
    /// Initial triangle capacity of a decoded model.
    pub preallocate: usize,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            preallocate: 2000,
        }
    }
}


#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Header decoding error: {0}")]
    HeaderError(ReaderErr),
    #[error("Text header decoding error: {0}")]
    TextHeaderError(text_coder::Err),
    #[error("Error in text triangle {index}: {source}")]
    TextTriangleError { index: usize, source: text_coder::Err },
    #[error("Error in triangle {index}: {source}")]
    TriangleError { index: usize, source: ReaderErr },
    #[error("Unknown model version {0}")]
    UnknownVersion(i32),
}
