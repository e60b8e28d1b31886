// lib.rs

/// Contains the file-level entry points and the Wavefront OBJ importer.
pub mod io;

/// Contains the format headers and texture-name rules shared by the encoders and decoders.
pub(crate) mod shared;

/// Defines the encoders.
pub mod encode;

/// Defines the decoders.
pub mod decode;

/// Contains the value types, the primitive codecs and the model.
pub mod core;

/// Defines the interface to the rendering engine.
pub mod engine;

pub use crate::core::model::ModelFile;

pub mod prelude {
    pub use crate::core::bit_coder::{ByteReader, ByteWriter, ReaderErr, StreamReader, WriterErr};
    pub use crate::core::model::ModelFile;
    pub use crate::core::shared::{normal_to_plane, Color, ConfigType, NdVector, Vector2, Vector3};
    pub use crate::core::triangle::{Material, ModelTriangle, RenderState, Vertex, VertexTex2};
    pub use crate::engine::Engine;
    pub use crate::io::Format;
}
