//! Hand-off of a loaded model to the rendering engine.

use tracing::{debug, error};

use crate::core::{
    model::{Err, ModelFile},
    triangle::{Material, RenderState, VertexTex2},
};
use crate::shared::texture;

/// The part of the rendering engine a model needs in order to build a
/// renderable object.
pub trait Engine {
    /// Configured distance of the LOD frontier `tier` (0 or 1).
    fn get_limit_lod(&self, tier: usize) -> f32;

    /// Currently configured overlay index for triangles with a variable
    /// secondary texture.
    fn get_second_texture(&self) -> i32;

    /// Adds one triangle to object `obj_rank`. Returns `false` if the
    /// engine refused it.
    #[allow(clippy::too_many_arguments)]
    fn add_triangles(
        &mut self,
        obj_rank: i32,
        vertices: &[VertexTex2; 3],
        material: &Material,
        state: RenderState,
        tex1_name: &str,
        tex2_name: &str,
        min: f32,
        max: f32,
        global_update: bool,
    ) -> bool;
}

/// Replaces the standard LOD frontiers stored in files with the configured ones.
/// Ranges other than the three standard ones are kept.
pub fn lod_range(min: f32, max: f32, limits: [f32; 2]) -> (f32, f32) {
    if min == 0.0 && max == 100.0 {
        (min, limits[0])
    } else if min == 100.0 && max == 200.0 {
        (limits[0], limits[1])
    } else if min == 200.0 && max == 1_000_000.0 {
        (limits[1], max)
    } else {
        (min, max)
    }
}

impl ModelFile {
    /// Hands every triangle to `engine` as part of object `obj_rank`, resolving
    /// LOD frontiers and variable secondary textures from the engine's configuration.
    /// Stops at the first triangle the engine refuses.
    pub fn create_engine_object<E: Engine>(&self, engine: &mut E, obj_rank: i32) -> Result<(), Err> {
        let limits = [engine.get_limit_lod(0), engine.get_limit_lod(1)];
        debug!(
            "Creating engine object {} from {} triangles, LOD limits {:?}",
            obj_rank, self.get_triangle_count(), limits
        );

        for (index, t) in self.get_triangles().iter().enumerate() {
            let (min, max) = lod_range(t.min, t.max, limits);

            let mut state = t.state;
            let mut tex2_name = t.tex2_name.clone();
            if t.variable_tex2 {
                let tex_num = engine.get_second_texture();
                state |= texture::secondary_state(tex_num);
                tex2_name = texture::dirty_texture_name(tex_num);
            }

            let vertices = [t.p1, t.p2, t.p3];
            let ok = engine.add_triangles(
                obj_rank,
                &vertices,
                &t.material,
                state,
                &t.tex1_name,
                &tex2_name,
                min,
                max,
                false,
            );
            if !ok {
                error!("Engine refused triangle {} of object {}", index, obj_rank);
                return Err(Err::EngineRejected(index));
            }
        }
        Ok(())
    }
}
