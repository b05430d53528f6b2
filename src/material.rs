use glam::Vec3;

/// Blinn-Phong surface parameters, edited live from the debug GUI.
///
/// These are plain owned values handed to the renderer each frame; the
/// uniform data the shader sees is derived explicitly in `to_uniform`, so
/// there is no hidden per-draw state.
#[derive(Debug, Clone, Copy)]
pub struct MaterialParams {
    pub ambient_color: Vec3,
    pub ambient_reflection: f32,
    pub diffuse_reflection: f32,
    pub specular_reflection: f32,
    pub specular_exponent: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::splat(0.25),
            ambient_reflection: 1.0,
            diffuse_reflection: 1.0,
            specular_reflection: 0.5,
            specular_exponent: 100.0,
        }
    }
}

/// Point light parameters, edited live from the debug GUI
#[derive(Debug, Clone, Copy)]
pub struct LightParams {
    pub color: Vec3,
    pub position: Vec3,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            position: Vec3::new(-10.0, 20.0, 10.0),
        }
    }
}

/// Lighting uniform buffer data for the mesh shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniforms {
    pub ambient_color: [f32; 3],
    pub ambient_reflection: f32,
    pub light_color: [f32; 3],
    pub diffuse_reflection: f32,
    pub light_position: [f32; 3],
    pub specular_reflection: f32,
    pub specular_exponent: f32,
    pub _pad: [f32; 3],
}

pub fn to_uniform(material: &MaterialParams, light: &LightParams) -> LightingUniforms {
    LightingUniforms {
        ambient_color: material.ambient_color.to_array(),
        ambient_reflection: material.ambient_reflection,
        light_color: light.color.to_array(),
        diffuse_reflection: material.diffuse_reflection,
        light_position: light.position.to_array(),
        specular_reflection: material.specular_reflection,
        specular_exponent: material.specular_exponent,
        _pad: [0.0; 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightingUniforms>() % 16, 0);
    }

    #[test]
    fn uniform_carries_edited_values() {
        let material = MaterialParams {
            ambient_color: Vec3::new(0.1, 0.2, 0.3),
            ambient_reflection: 0.5,
            diffuse_reflection: 0.75,
            specular_reflection: 0.25,
            specular_exponent: 32.0,
        };
        let light = LightParams {
            color: Vec3::new(1.0, 0.9, 0.8),
            position: Vec3::new(1.0, 2.0, 3.0),
        };

        let uniform = to_uniform(&material, &light);

        assert_eq!(uniform.ambient_color, [0.1, 0.2, 0.3]);
        assert_eq!(uniform.ambient_reflection, 0.5);
        assert_eq!(uniform.light_color, [1.0, 0.9, 0.8]);
        assert_eq!(uniform.diffuse_reflection, 0.75);
        assert_eq!(uniform.light_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.specular_reflection, 0.25);
        assert_eq!(uniform.specular_exponent, 32.0);
    }
}
