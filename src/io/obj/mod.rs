// use tobj to load the obj file and convert it to our triangle representation
use std::fmt::Debug;
use std::path::Path;

use tracing::debug;

use crate::core::{
    model::ModelFile,
    shared::{normal_to_plane, Color, Vector2, Vector3},
    triangle::{Material, ModelTriangle, VertexTex2},
};

/// Far LOD frontier given to imported triangles, so that they are always visible.
const IMPORT_MAX_DISTANCE: f32 = 1_000_000.0;

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("Index {0} is out of range")]
    IndexOutOfRange(u32),
    #[error("OBJ loading error: {0}")]
    LoadError(#[from] tobj::LoadError),
}

/// Builds a model from every object of a Wavefront OBJ file. Faces are
/// triangulated, and triangles without normals in the file get the face normal.
pub fn load_obj<P: AsRef<Path> + Debug>(path: P) -> Result<ModelFile, Err> {
    let op = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    let (models, _materials) = tobj::load_obj(path.as_ref(), &op)?;
    let mut model_file = ModelFile::new();
    for model in &models {
        let mesh = &model.mesh;
        debug!("OBJ object {:?}: {} faces", model.name, mesh.indices.len() / 3);
        for face in mesh.indices.chunks_exact(3) {
            let triangle = load_triangle(mesh, [face[0], face[1], face[2]])?;
            model_file.push(triangle);
        }
    }
    Ok(model_file)
}

fn load_triangle(mesh: &tobj::Mesh, face: [u32; 3]) -> Result<ModelTriangle, Err> {
    let mut vertices = [VertexTex2::default(); 3];
    for (v, &i) in vertices.iter_mut().zip(face.iter()) {
        v.coord = load_vec3(&mesh.positions, i)?;
        if !mesh.normals.is_empty() {
            v.normal = load_vec3(&mesh.normals, i)?;
        }
        if !mesh.texcoords.is_empty() {
            let idx = i as usize * 2;
            let uv = mesh.texcoords.get(idx..idx + 2).ok_or(Err::IndexOutOfRange(i))?;
            v.tex_coord = Vector2::from([uv[0], uv[1]]);
        }
    }
    if mesh.normals.is_empty() {
        let normal = normal_to_plane(vertices[2].coord, vertices[1].coord, vertices[0].coord);
        for v in vertices.iter_mut() {
            v.normal = normal;
        }
    }

    let [p1, p2, p3] = vertices;
    Ok(ModelTriangle {
        p1,
        p2,
        p3,
        material: Material {
            diffuse: Color::from([1.0, 1.0, 1.0, 0.0]),
            ambient: Color::from([0.5, 0.5, 0.5, 0.0]),
            specular: Color::zero(),
        },
        min: 0.0,
        max: IMPORT_MAX_DISTANCE,
        ..Default::default()
    })
}

fn load_vec3(data: &[f32], i: u32) -> Result<Vector3, Err> {
    let idx = i as usize * 3;
    let x = data.get(idx..idx + 3).ok_or(Err::IndexOutOfRange(i))?;
    Ok(Vector3::from([x[0], x[1], x[2]]))
}
