use std::io::BufRead;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::Vertex;

/// A contiguous index range drawn with one material
#[derive(Debug, Clone)]
pub struct Submesh {
    pub index_range: Range<u32>,
    pub material_id: Option<usize>,
}

/// Material table entry resolved from the OBJ's MTL file
#[derive(Debug, Clone)]
pub struct MaterialInfo {
    pub name: String,
    /// Diffuse texture path, already resolved relative to the OBJ file
    pub diffuse_texture: Option<PathBuf>,
}

/// CPU-side mesh: one interleaved vertex buffer, one index buffer, and a
/// submesh per OBJ object so each can bind its own texture
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub submeshes: Vec<Submesh>,
    pub materials: Vec<MaterialInfo>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load an OBJ file (and its MTL materials) from disk
pub fn load_obj_file(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    let (models, materials) = tobj::load_obj(path, &load_options())
        .with_context(|| format!("Failed to parse OBJ file: {:?}", path))?;

    let materials = match materials {
        Ok(materials) => materials,
        Err(err) => {
            log::warn!("Materials for {:?} failed to load: {}", path, err);
            Vec::new()
        }
    };

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mesh = build_mesh(&models, &materials, base_dir)?;

    log::info!(
        "Loaded {:?}: {} vertices, {} triangles, {} submeshes, {} materials",
        path,
        mesh.vertices.len(),
        mesh.indices.len() / 3,
        mesh.submeshes.len(),
        mesh.materials.len()
    );
    Ok(mesh)
}

/// Parse OBJ data from a reader, without material resolution.
/// Used for in-memory meshes and tests.
pub fn parse_obj(reader: &mut impl BufRead) -> Result<MeshData> {
    let (models, _) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .context("Failed to parse OBJ data")?;

    build_mesh(&models, &[], Path::new("."))
}

fn build_mesh(
    models: &[tobj::Model],
    materials: &[tobj::Material],
    base_dir: &Path,
) -> Result<MeshData> {
    let mut vertices = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut submeshes = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let base_vertex = vertices.len() as u32;
        let first_index = indices.len() as u32;

        for (i, position) in mesh.positions.chunks_exact(3).enumerate() {
            let normal = mesh
                .normals
                .get(i * 3..i * 3 + 3)
                .map_or([0.0; 3], |n| [n[0], n[1], n[2]]);
            let tex_coord = mesh
                .texcoords
                .get(i * 2..i * 2 + 2)
                .map_or([0.0; 2], |t| [t[0], t[1]]);

            vertices.push(Vertex {
                position: [position[0], position[1], position[2]],
                normal,
                tex_coord,
            });
        }

        indices.extend(mesh.indices.iter().map(|&index| base_vertex + index));

        submeshes.push(Submesh {
            index_range: first_index..indices.len() as u32,
            material_id: mesh.material_id,
        });
    }

    // tobj yields a model even for input with no faces, so check the built
    // geometry rather than the model list
    anyhow::ensure!(
        !vertices.is_empty() && !indices.is_empty(),
        "No geometry found in OBJ data"
    );

    let materials = materials
        .iter()
        .map(|material| MaterialInfo {
            name: material.name.clone(),
            diffuse_texture: material
                .diffuse_texture
                .as_ref()
                .map(|texture| base_dir.join(texture)),
        })
        .collect();

    Ok(MeshData {
        vertices,
        indices,
        submeshes,
        materials,
    })
}
