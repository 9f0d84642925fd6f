//! Decoding of the binary glTF (GLB) asset into flat triangle data.

use glam::{EulerRot, Mat3, Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("asset contains no triangle meshes")]
    NoMeshes,
    #[error("mesh primitive {0} has no POSITION attribute")]
    MissingPositions(usize),
}

/// Flattened, world-space triangle soup of the whole default scene.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn from_glb(bytes: &[u8]) -> Result<Self, ModelError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let blob = gltf.blob.as_deref();
        let scene = gltf
            .default_scene()
            .or_else(|| gltf.scenes().next())
            .ok_or(ModelError::NoMeshes)?;

        let mut out = MeshData::default();
        let mut stack: Vec<(gltf::Node, Mat4)> =
            scene.nodes().map(|n| (n, Mat4::IDENTITY)).collect();
        let mut primitive_count = 0usize;
        while let Some((node, parent)) = stack.pop() {
            let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
            if let Some(mesh) = node.mesh() {
                for primitive in mesh.primitives() {
                    if primitive.mode() != gltf::mesh::Mode::Triangles {
                        continue;
                    }
                    out.append_primitive(&primitive, blob, world, primitive_count)?;
                    primitive_count += 1;
                }
            }
            stack.extend(node.children().map(|c| (c, world)));
        }
        if out.indices.is_empty() {
            return Err(ModelError::NoMeshes);
        }
        log::info!(
            "[asset] decoded {} primitives, {} vertices, {} triangles",
            primitive_count,
            out.positions.len(),
            out.indices.len() / 3
        );
        Ok(out)
    }

    fn append_primitive(
        &mut self,
        primitive: &gltf::Primitive,
        blob: Option<&[u8]>,
        world: Mat4,
        ordinal: usize,
    ) -> Result<(), ModelError> {
        let reader = primitive.reader(|buffer| match buffer.source() {
            gltf::buffer::Source::Bin => blob,
            gltf::buffer::Source::Uri(_) => None,
        });
        let positions: Vec<Vec3> = reader
            .read_positions()
            .ok_or(ModelError::MissingPositions(ordinal))?
            .map(|p| world.transform_point3(Vec3::from(p)))
            .collect();
        let base = self.positions.len() as u32;
        let count = positions.len();

        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..count as u32).collect(),
        };
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(ns) => ns
                .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                .collect(),
            None => smooth_normals(&positions, &indices),
        };

        let factor = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();
        let colors: Vec<[f32; 4]> = match reader.read_colors(0) {
            Some(cs) => cs
                .into_rgba_f32()
                .map(|c| [c[0] * factor[0], c[1] * factor[1], c[2] * factor[2], c[3] * factor[3]])
                .collect(),
            None => vec![factor; count],
        };

        self.positions.extend(positions.iter().map(|p| p.to_array()));
        self.normals.extend(normals.iter().map(|n| n.to_array()));
        self.colors.extend(colors.into_iter().take(count));
        // Colour streams shorter than the position stream fall back to the material factor.
        self.colors.resize(self.positions.len(), factor);
        // Triangles with an out-of-range corner are dropped whole so the rest stay aligned.
        self.indices.extend(
            indices
                .chunks_exact(3)
                .filter(|tri| tri.iter().all(|&i| (i as usize) < count))
                .flatten()
                .map(|&i| base + i),
        );
        Ok(())
    }

    /// Axis-aligned bounds as (min, max). Empty meshes report the origin.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut it = self.positions.iter().map(|p| Vec3::from(*p));
        let Some(first) = it.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }

    pub fn center(&self) -> Vec3 {
        let (lo, hi) = self.bounds();
        (lo + hi) * 0.5
    }
}

fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter().map(|n| n.normalize_or_zero()).collect()
}

/// Placement of the loaded model in the scene.
///
/// The model is shifted by its (unscaled) bounding-box centre, then scaled,
/// matching how the slide positions were authored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub offset: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl ModelTransform {
    pub fn centered(mesh: &MeshData, scale: f32) -> Self {
        Self {
            offset: -mesh.center(),
            rotation: Vec3::ZERO,
            scale,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}
