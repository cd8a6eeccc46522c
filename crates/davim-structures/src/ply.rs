//! PLY model loading.
//!
//! Reads vertex positions, an optional per-vertex scalar property and face
//! lists from ASCII or binary PLY files. Polygonal faces are fan-triangulated.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use davim_core::{DavimError, Result};
use glam::{UVec3, Vec3};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

/// Geometry and scalar field read from a PLY file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlyModel {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangles (empty for point clouds).
    pub faces: Vec<UVec3>,
    /// Per-vertex scalar values, if the scalar property is present.
    pub scalars: Option<Vec<f32>>,
}

impl PlyModel {
    /// Whether the model has faces, i.e. should be shown as a surface mesh.
    pub fn is_mesh(&self) -> bool {
        !self.faces.is_empty()
    }
}

/// Loads a PLY file, reading the vertex property `scalar_property` as the
/// scalar field.
pub fn load_ply(path: impl AsRef<Path>, scalar_property: &str) -> Result<PlyModel> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let model = read_ply(&mut reader, scalar_property)?;
    log::info!(
        "loaded {}: {} vertices, {} triangles, scalar '{}' {}",
        path.display(),
        model.vertices.len(),
        model.faces.len(),
        scalar_property,
        if model.scalars.is_some() { "present" } else { "missing" }
    );
    Ok(model)
}

/// Reads a PLY model from any reader.
pub fn read_ply<R: Read>(reader: &mut R, scalar_property: &str) -> Result<PlyModel> {
    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(reader)
        .map_err(|e| DavimError::PlyError(e.to_string()))?;

    let vertex_elements = ply
        .payload
        .get("vertex")
        .ok_or_else(|| DavimError::PlyError("missing 'vertex' element".to_string()))?;

    let vertices = vertex_elements
        .iter()
        .map(|v| {
            Ok(Vec3::new(
                scalar_of(v, "x")?,
                scalar_of(v, "y")?,
                scalar_of(v, "z")?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let has_scalar = vertex_elements
        .first()
        .is_some_and(|v| v.contains_key(scalar_property));
    let scalars = if has_scalar {
        Some(
            vertex_elements
                .iter()
                .map(|v| scalar_of(v, scalar_property))
                .collect::<Result<Vec<_>>>()?,
        )
    } else {
        None
    };

    let mut faces = Vec::new();
    if let Some(face_elements) = ply.payload.get("face") {
        for face in face_elements {
            let indices = face
                .get("vertex_indices")
                .or_else(|| face.get("vertex_index"))
                .ok_or_else(|| DavimError::PlyError("face without vertex indices".to_string()))?;
            triangulate(&indices_of(indices)?, &mut faces);
        }
    }

    Ok(PlyModel {
        vertices,
        faces,
        scalars,
    })
}

fn scalar_of(element: &DefaultElement, key: &str) -> Result<f32> {
    let property = element
        .get(key)
        .ok_or_else(|| DavimError::PlyError(format!("vertex without property '{key}'")))?;
    let value = match *property {
        Property::Float(v) => v,
        Property::Double(v) => v as f32,
        Property::Char(v) => f32::from(v),
        Property::UChar(v) => f32::from(v),
        Property::Short(v) => f32::from(v),
        Property::UShort(v) => f32::from(v),
        Property::Int(v) => v as f32,
        Property::UInt(v) => v as f32,
        _ => {
            return Err(DavimError::PlyError(format!(
                "vertex property '{key}' is a list"
            )))
        }
    };
    Ok(value)
}

fn indices_of(property: &Property) -> Result<Vec<u32>> {
    fn convert<T: Copy + TryInto<u32>>(list: &[T]) -> Result<Vec<u32>> {
        list.iter()
            .map(|&i| {
                i.try_into()
                    .map_err(|_| DavimError::PlyError("negative vertex index".to_string()))
            })
            .collect()
    }

    match property {
        Property::ListInt(list) => convert(list),
        Property::ListUInt(list) => Ok(list.clone()),
        Property::ListShort(list) => convert(list),
        Property::ListUShort(list) => convert(list),
        Property::ListChar(list) => convert(list),
        Property::ListUChar(list) => convert(list),
        _ => Err(DavimError::PlyError(
            "face vertex indices must be an integer list".to_string(),
        )),
    }
}

/// Fan-triangulates one polygon into `out`.
fn triangulate(polygon: &[u32], out: &mut Vec<UVec3>) {
    if polygon.len() < 3 {
        log::warn!("skipping degenerate face with {} vertices", polygon.len());
        return;
    }
    let first = polygon[0];
    for pair in polygon[1..].windows(2) {
        out.push(UVec3::new(first, pair[0], pair[1]));
    }
}
