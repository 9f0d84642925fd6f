// Host-side tests for GLB decoding and model placement.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::model::{MeshData, ModelError, ModelTransform};
use glam::Vec3;

fn pad4(bytes: &mut Vec<u8>, fill: u8) {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
}

/// Minimal GLB: one right triangle in the XY plane with u16 indices.
fn triangle_glb(with_color_factor: bool) -> Vec<u8> {
    indexed_glb(&[0, 1, 2], with_color_factor)
}

/// Same three vertices, drawn with an arbitrary u16 index list.
fn indexed_glb(indices: &[u16], with_color_factor: bool) -> Vec<u8> {
    let mut bin = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in indices {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    pad4(&mut bin, 0);

    let (material_ref, materials) = if with_color_factor {
        (
            r#","material":0"#,
            r#","materials":[{"pbrMetallicRoughness":{"baseColorFactor":[0.5,0.25,1.0,1.0]}}]"#,
        )
    } else {
        ("", "")
    };
    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],"nodes":[{{"mesh":0}}],"meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}},"indices":1{material_ref}}}]}}],"buffers":[{{"byteLength":{len}}}],"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}},{{"buffer":0,"byteOffset":36,"byteLength":{index_bytes}}}],"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[2,2,0]}},{{"bufferView":1,"componentType":5123,"count":{index_count},"type":"SCALAR"}}]{materials}}}"#,
        len = bin.len(),
        index_bytes = indices.len() * 2,
        index_count = indices.len()
    );
    let mut json = json.into_bytes();
    pad4(&mut json, b' ');

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json);
    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin);
    glb
}

#[test]
fn decodes_single_triangle() {
    let mesh = MeshData::from_glb(&triangle_glb(false)).expect("valid glb");
    assert_eq!(mesh.positions, vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.normals.len(), 3);
    assert_eq!(mesh.colors.len(), 3);
    // No NORMAL attribute: face normal of a CCW triangle in XY.
    for n in &mesh.normals {
        assert!(Vec3::from(*n).distance(Vec3::Z) < 1e-6);
    }
    // Default material is white.
    assert_eq!(mesh.colors[0], [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn out_of_range_index_drops_its_whole_triangle() {
    let glb = indexed_glb(&[0, 1, 2, 0, 7, 2, 2, 1, 0], false);
    let mesh = MeshData::from_glb(&glb).expect("valid glb");
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 1, 0]);
}

#[test]
fn base_color_factor_tints_vertices() {
    let mesh = MeshData::from_glb(&triangle_glb(true)).unwrap();
    assert!(mesh.colors.iter().all(|c| *c == [0.5, 0.25, 1.0, 1.0]));
}

#[test]
fn bounds_and_center() {
    let mesh = MeshData::from_glb(&triangle_glb(false)).unwrap();
    let (lo, hi) = mesh.bounds();
    assert_eq!(lo, Vec3::ZERO);
    assert_eq!(hi, Vec3::new(2.0, 2.0, 0.0));
    assert_eq!(mesh.center(), Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(MeshData::default().bounds(), (Vec3::ZERO, Vec3::ZERO));
}

#[test]
fn garbage_is_a_parse_error() {
    let err = MeshData::from_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}

#[test]
fn centred_transform_offsets_by_unscaled_center() {
    let mesh = MeshData::from_glb(&triangle_glb(false)).unwrap();
    let t = ModelTransform::centered(&mesh, 18.0);
    assert_eq!(t.offset, Vec3::new(-1.0, -1.0, 0.0));
    assert_eq!(t.rotation, Vec3::ZERO);
    let m = t.matrix();
    assert!(m.transform_point3(Vec3::ZERO).distance(t.offset) < 1e-5);
    assert!(m
        .transform_point3(Vec3::new(1.0, 0.0, 0.0))
        .distance(Vec3::new(17.0, -1.0, 0.0))
        < 1e-4);
}

#[test]
fn rotation_spins_about_vertical_axis() {
    let t = ModelTransform {
        rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        ..ModelTransform::default()
    };
    let p = t.matrix().transform_point3(Vec3::X);
    assert!(p.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-5);
}
