// glTF 2.0 export.
//
// One embedded buffer (base64 data URI) holding POSITION and NORMAL
// as FLOAT VEC3 plus UNSIGNED_SHORT indices. Vertices are duplicated
// per face for flat shading.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::warn;
use serde_json::{json, Value};

use crate::geometries::crystal_mesh::CrystalGeometry;

const COMPONENT_FLOAT: u32 = 5126;
const COMPONENT_UNSIGNED_SHORT: u32 = 5123;
const TARGET_ARRAY_BUFFER: u32 = 34962;
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;
const MODE_TRIANGLES: u32 = 4;

/// Build a glTF 2.0 document for a crystal mesh, multiplying vertex
/// coordinates by `scale`.
pub fn write_gltf(geometry: &CrystalGeometry, scale: f64) -> Value {
    let mut positions: Vec<f32> = Vec::new();
    let mut normals: Vec<f32> = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    for face in &geometry.faces {
        if face.vertices.len() < 3 {
            continue;
        }
        if positions.len() / 3 + face.vertices.len() > u16::MAX as usize {
            warn!("glTF export truncated: vertex count exceeds 16-bit indices");
            break;
        }
        let base = (positions.len() / 3) as u16;
        for vertex in &face.vertices {
            positions.extend_from_slice(&[
                (vertex.x * scale) as f32,
                (vertex.y * scale) as f32,
                (vertex.z * scale) as f32,
            ]);
            normals.extend_from_slice(&[
                face.normal.x as f32,
                face.normal.y as f32,
                face.normal.z as f32,
            ]);
        }
        for i in 1..face.vertices.len() as u16 - 1 {
            indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    let vertex_count = positions.len() / 3;
    let (min, max) = position_bounds(&positions);

    let mut buffer: Vec<u8> = Vec::new();
    for value in &positions {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    let normals_offset = buffer.len();
    for value in &normals {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    let indices_offset = buffer.len();
    for value in &indices {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }

    json!({
        "asset": { "version": "2.0", "generator": "crystalgen" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0 }],
        "meshes": [{
            "primitives": [{
                "attributes": { "POSITION": 0, "NORMAL": 1 },
                "indices": 2,
                "material": 0,
                "mode": MODE_TRIANGLES
            }]
        }],
        "materials": [{
            "pbrMetallicRoughness": {
                "baseColorFactor": [0.055, 0.647, 0.914, 0.9],
                "metallicFactor": 0.1,
                "roughnessFactor": 0.3
            },
            "alphaMode": "BLEND"
        }],
        "buffers": [{
            "byteLength": buffer.len(),
            "uri": format!("data:application/octet-stream;base64,{}", STANDARD.encode(&buffer))
        }],
        "bufferViews": [
            {
                "buffer": 0,
                "byteOffset": 0,
                "byteLength": positions.len() * 4,
                "target": TARGET_ARRAY_BUFFER
            },
            {
                "buffer": 0,
                "byteOffset": normals_offset,
                "byteLength": normals.len() * 4,
                "target": TARGET_ARRAY_BUFFER
            },
            {
                "buffer": 0,
                "byteOffset": indices_offset,
                "byteLength": indices.len() * 2,
                "target": TARGET_ELEMENT_ARRAY_BUFFER
            }
        ],
        "accessors": [
            {
                "bufferView": 0,
                "componentType": COMPONENT_FLOAT,
                "count": vertex_count,
                "type": "VEC3",
                "min": min,
                "max": max
            },
            {
                "bufferView": 1,
                "componentType": COMPONENT_FLOAT,
                "count": vertex_count,
                "type": "VEC3"
            },
            {
                "bufferView": 2,
                "componentType": COMPONENT_UNSIGNED_SHORT,
                "count": indices.len(),
                "type": "SCALAR"
            }
        ]
    })
}

fn position_bounds(positions: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let mut min = vec![f32::MAX; 3];
    let mut max = vec![f32::MIN; 3];
    for chunk in positions.chunks_exact(3) {
        for axis in 0..3 {
            min[axis] = min[axis].min(chunk[axis]);
            max[axis] = max[axis].max(chunk[axis]);
        }
    }
    if positions.is_empty() {
        min = vec![0.0; 3];
        max = vec![0.0; 3];
    }
    (min, max)
}
