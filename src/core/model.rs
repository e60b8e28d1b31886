use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use tracing::error;

use crate::core::{
    bit_coder::StreamReader,
    shared::{normal_to_plane, Color, ConfigType, Vector3},
    triangle::{Material, ModelTriangle, RenderState, VertexTex2},
};
use crate::{decode, encode};

/// Distance within which a vertex is taken as lying under a queried position.
const HEIGHT_TOLERANCE: f32 = 5.0;

/// A triangle model, read from or written to any of the supported formats.
///
/// Every read starts by clearing the model, and a failed read leaves it empty.
#[derive(Debug, Clone)]
pub struct ModelFile {
    triangles: Vec<ModelTriangle>,
    cfg: decode::Config,
}

impl Default for ModelFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFile {
    pub fn new() -> Self {
        Self::with_config(decode::Config::default())
    }

    pub fn with_config(cfg: decode::Config) -> Self {
        Self {
            triangles: Vec::with_capacity(cfg.preallocate),
            cfg,
        }
    }

    pub fn from_triangles(triangles: Vec<ModelTriangle>) -> Self {
        Self {
            triangles,
            cfg: decode::Config::default(),
        }
    }

    /// Reads a model in one of the deprecated binary layouts.
    pub fn read_model<R: Read>(&mut self, stream: R) -> Result<(), Err> {
        self.read_with(|cfg| decode::decode_legacy(&mut StreamReader::new(stream), cfg))
            .inspect_err(|e| error!("Failed to read legacy model: {}", e))
    }

    pub fn read_binary_model<R: Read>(&mut self, stream: R) -> Result<(), Err> {
        self.read_with(|cfg| decode::decode_binary(&mut StreamReader::new(stream), cfg))
            .inspect_err(|e| error!("Failed to read binary model: {}", e))
    }

    pub fn read_text_model<R: io::BufRead>(&mut self, stream: R) -> Result<(), Err> {
        self.read_with(|cfg| decode::decode_text(stream, cfg))
            .inspect_err(|e| error!("Failed to read text model: {}", e))
    }

    pub fn read_model_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Err> {
        let file = self.open(path.as_ref())?;
        self.read_model(BufReader::new(file))
    }

    pub fn read_binary_model_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Err> {
        let file = self.open(path.as_ref())?;
        self.read_binary_model(BufReader::new(file))
    }

    pub fn read_text_model_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Err> {
        let file = self.open(path.as_ref())?;
        self.read_text_model(BufReader::new(file))
    }

    /// Writes the model in the newest deprecated binary layout.
    pub fn write_model<W: Write>(&self, mut stream: W) -> Result<(), Err> {
        let mut buffer = Vec::new();
        encode::encode_legacy(&self.triangles, &mut buffer)
            .map_err(Err::from)
            .and_then(|()| Self::flush_to(&buffer, &mut stream))
            .inspect_err(|e| error!("Failed to write legacy model: {}", e))
    }

    pub fn write_binary_model<W: Write>(&self, mut stream: W) -> Result<(), Err> {
        let mut buffer = Vec::new();
        encode::encode_binary(&self.triangles, &mut buffer)
            .map_err(Err::from)
            .and_then(|()| Self::flush_to(&buffer, &mut stream))
            .inspect_err(|e| error!("Failed to write binary model: {}", e))
    }

    pub fn write_text_model<W: Write>(&self, mut stream: W) -> Result<(), Err> {
        let mut text = String::new();
        encode::encode_text(&self.triangles, &mut text)
            .map_err(Err::from)
            .and_then(|()| Self::flush_to(text.as_bytes(), &mut stream))
            .inspect_err(|e| error!("Failed to write text model: {}", e))
    }

    pub fn write_model_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Err> {
        let file = self.create(path.as_ref())?;
        self.write_model(BufWriter::new(file))
    }

    pub fn write_binary_model_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Err> {
        let file = self.create(path.as_ref())?;
        self.write_binary_model(BufWriter::new(file))
    }

    pub fn write_text_model_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Err> {
        let file = self.create(path.as_ref())?;
        self.write_text_model(BufWriter::new(file))
    }

    /// Mirrors the model along the z axis, keeping the winding of every triangle.
    pub fn mirror(&mut self) {
        for t in self.triangles.iter_mut() {
            std::mem::swap(&mut t.p1, &mut t.p2);
            for v in t.get_vertices_mut() {
                let (coord_z, normal_z) = (v.coord.z(), v.normal.z());
                *v.coord.get_mut(2) = -coord_z;
                *v.normal.get_mut(2) = -normal_z;
            }
        }
    }

    /// Height of the first vertex lying within 5 units of `pos` in x and z,
    /// or 0 if there is none. This is an approximation, not a surface query.
    pub fn get_height(&self, pos: Vector3) -> f32 {
        self.triangles
            .iter()
            .flat_map(|t| t.get_vertices())
            .find(|v| {
                (pos.x() - v.coord.x()).abs() < HEIGHT_TOLERANCE
                    && (pos.z() - v.coord.z()).abs() < HEIGHT_TOLERANCE
            })
            .map_or(0.0, |v| v.coord.y())
    }

    /// Appends an untextured, flat-shaded triangle with a white material.
    pub fn create_triangle(&mut self, p1: Vector3, p2: Vector3, p3: Vector3, min: f32, max: f32) {
        let normal = normal_to_plane(p3, p2, p1);
        self.triangles.push(ModelTriangle {
            p1: VertexTex2::new(p1, normal),
            p2: VertexTex2::new(p2, normal),
            p3: VertexTex2::new(p3, normal),
            material: Material {
                diffuse: Color::from([1.0, 1.0, 1.0, 0.0]),
                ambient: Color::from([0.5, 0.5, 0.5, 0.0]),
                specular: Color::zero(),
            },
            min,
            max,
            state: RenderState::NORMAL,
            ..Default::default()
        });
    }

    pub fn get_triangles(&self) -> &[ModelTriangle] {
        &self.triangles
    }

    pub fn get_triangles_mut(&mut self) -> &mut Vec<ModelTriangle> {
        &mut self.triangles
    }

    pub fn get_triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    pub fn push(&mut self, triangle: ModelTriangle) {
        self.triangles.push(triangle);
    }

    fn read_with<F>(&mut self, decoder: F) -> Result<(), Err>
        where F: FnOnce(&decode::Config) -> Result<Vec<ModelTriangle>, decode::Err>
    {
        self.triangles.clear();
        self.triangles = decoder(&self.cfg)?;
        Ok(())
    }

    fn flush_to<W: Write>(bytes: &[u8], stream: &mut W) -> Result<(), Err> {
        stream.write_all(bytes)?;
        stream.flush()?;
        Ok(())
    }

    fn open(&mut self, path: &Path) -> Result<File, Err> {
        self.triangles.clear();
        File::open(path)
            .map_err(|source| Err::FileError { path: path.to_path_buf(), source })
            .inspect_err(|e| error!("Could not open file: {}", e))
    }

    fn create(&self, path: &Path) -> Result<File, Err> {
        if self.triangles.is_empty() {
            error!("Refusing to create {}: model has no triangles", path.display());
            return Err(encode::Err::EmptyModel.into());
        }
        File::create(path)
            .map_err(|source| Err::FileError { path: path.to_path_buf(), source })
            .inspect_err(|e| error!("Could not create file: {}", e))
    }
}


#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Decoding error: {0}")]
    DecodeError(#[from] decode::Err),
    #[error("Encoding error: {0}")]
    EncodeError(#[from] encode::Err),
    #[error("Engine rejected triangle {0}")]
    EngineRejected(usize),
    #[error("{}: {source}", .path.display())]
    FileError { path: PathBuf, source: io::Error },
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shared::Vector2;

    fn vertex(x: f32, y: f32, z: f32) -> VertexTex2 {
        VertexTex2 {
            coord: Vector3::from([x, y, z]),
            normal: Vector3::from([0.0, 0.5, 0.5]),
            tex_coord: Vector2::from([0.1, 0.2]),
            tex_coord2: Vector2::zero(),
        }
    }

    fn sample() -> ModelFile {
        let mut model = ModelFile::new();
        model.push(ModelTriangle {
            p1: vertex(0.0, 1.0, 2.0),
            p2: vertex(3.0, 4.0, 5.0),
            p3: vertex(6.0, 7.0, 8.0),
            tex1_name: "a.png".to_string(),
            ..Default::default()
        });
        model.push(ModelTriangle {
            p1: vertex(20.0, 9.0, 20.0),
            p2: vertex(30.0, 10.0, 30.0),
            p3: vertex(40.0, 11.0, -40.0),
            ..Default::default()
        });
        model
    }

    #[test]
    fn test_mirror() {
        let original = sample();
        let mut model = original.clone();
        model.mirror();

        let t = &model.get_triangles()[0];
        assert_eq!(t.p1.coord, Vector3::from([3.0, 4.0, -5.0]));
        assert_eq!(t.p2.coord, Vector3::from([0.0, 1.0, -2.0]));
        assert_eq!(t.p3.coord, Vector3::from([6.0, 7.0, -8.0]));
        assert_eq!(t.p3.normal, Vector3::from([0.0, 0.5, -0.5]));
        assert_eq!(t.p1.tex_coord, Vector2::from([0.1, 0.2]));

        model.mirror();
        assert_eq!(model.get_triangles(), original.get_triangles());
    }

    #[test]
    fn test_height() {
        let model = sample();
        assert_eq!(model.get_height(Vector3::from([1.0, 100.0, 1.0])), 1.0);
        // checked in order p1, p2, p3: p2 of the first triangle is the first hit
        assert_eq!(model.get_height(Vector3::from([7.5, 0.0, 9.0])), 4.0);
        assert_eq!(model.get_height(Vector3::from([39.0, 0.0, -39.0])), 11.0);
        // the tolerance is strict
        assert_eq!(model.get_height(Vector3::from([25.0, 0.0, 20.0])), 0.0);
        assert_eq!(model.get_height(Vector3::from([-100.0, 0.0, 0.0])), 0.0);
        assert_eq!(ModelFile::new().get_height(Vector3::zero()), 0.0);
    }

    #[test]
    fn test_create_triangle() {
        let mut model = ModelFile::new();
        model.create_triangle(
            Vector3::from([0.0, 0.0, 0.0]),
            Vector3::from([0.0, 0.0, 1.0]),
            Vector3::from([1.0, 0.0, 0.0]),
            10.0,
            20.0,
        );
        assert_eq!(model.get_triangle_count(), 1);
        let t = &model.get_triangles()[0];
        let up = Vector3::from([0.0, 1.0, 0.0]);
        for v in t.get_vertices() {
            assert_eq!(v.normal, up);
            assert_eq!(v.tex_coord, Vector2::zero());
            assert_eq!(v.tex_coord2, Vector2::zero());
        }
        assert_eq!(t.material.diffuse, Color::from([1.0, 1.0, 1.0, 0.0]));
        assert_eq!(t.material.ambient, Color::from([0.5, 0.5, 0.5, 0.0]));
        assert_eq!(t.material.specular, Color::zero());
        assert_eq!((t.min, t.max), (10.0, 20.0));
        assert!(t.tex1_name.is_empty() && t.tex2_name.is_empty());
        assert!(!t.variable_tex2);
        assert_eq!(t.state, RenderState::NORMAL);
    }

    #[test]
    fn test_empty_model_writes_fail() {
        let model = ModelFile::new();
        let mut out = Vec::new();
        assert!(matches!(model.write_model(&mut out), Err(Err::EncodeError(encode::Err::EmptyModel))));
        assert!(matches!(model.write_binary_model(&mut out), Err(Err::EncodeError(encode::Err::EmptyModel))));
        assert!(matches!(model.write_text_model(&mut out), Err(Err::EncodeError(encode::Err::EmptyModel))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_failed_read_clears() {
        let mut model = sample();
        assert!(model.read_binary_model(&[1_u8, 0, 0][..]).is_err());
        assert!(model.is_empty());

        let mut model = sample();
        let mut buffer = Vec::new();
        sample().write_binary_model(&mut buffer).unwrap();
        buffer[0] = 2;
        assert!(matches!(
            model.read_binary_model(buffer.as_slice()),
            Err(Err::DecodeError(decode::Err::UnknownVersion(2)))
        ));
        assert!(model.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let mut model = sample();
        let path = std::env::temp_dir().join("modelfile-test-does-not-exist.mod");
        assert!(matches!(model.read_model_file(&path), Err(Err::FileError { .. })));
        assert!(model.is_empty());
    }

    #[test]
    fn test_binary_round_trip_in_memory() {
        let model = sample();
        let mut buffer = Vec::new();
        model.write_binary_model(&mut buffer).unwrap();
        let mut read = ModelFile::new();
        read.read_binary_model(buffer.as_slice()).unwrap();
        assert_eq!(read.get_triangles(), model.get_triangles());
    }
}
