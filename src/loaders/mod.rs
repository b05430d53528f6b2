pub mod obj;
pub mod texture;

pub use obj::{load_obj_file, MeshData, Submesh};
pub use texture::{load_texture_file, TextureData};
