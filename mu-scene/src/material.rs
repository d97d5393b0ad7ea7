//! Materials and the texture binding installed on them

use std::path::PathBuf;

use mu_tex::Bitmap;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Pixel blending applied when the mesh is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Opaque draw, no blending
    #[default]
    None,
    /// Standard source-over alpha blending
    Normal,
}

/// A decoded bitmap installed as a material's map.
///
/// The map owns its pixel buffer; dropping it releases the resource.
#[derive(Debug, Clone)]
pub struct TextureMap {
    pub bitmap: Bitmap,
    /// File the bitmap was decoded from
    pub source: PathBuf,
}

/// Mutable render state of a mesh.
#[derive(Debug)]
pub struct Material {
    pub map: Option<TextureMap>,
    /// Base tint multiplied with the map; reset to white on bind
    pub color: [f32; 3],
    pub transparent: bool,
    pub blend_mode: BlendMode,
    pub depth_write: bool,
    /// Set when render state changed and must be refreshed downstream
    pub needs_update: bool,
}

impl Material {
    /// Material state as the model parser constructs it: nothing bound.
    pub fn unbound() -> Self {
        Self {
            map: None,
            color: WHITE,
            transparent: false,
            blend_mode: BlendMode::None,
            depth_write: true,
            needs_update: false,
        }
    }

    /// Swap a fully-built binding into this material.
    ///
    /// The previous map is taken out and released before the replacement
    /// goes in, so two maps never alias the same pixel buffer. All render
    /// state lands in this one call; the base tint resets to white so the
    /// map's own colors come through untinted.
    pub fn install(&mut self, binding: MaterialBinding) {
        let released = self.map.take();
        drop(released);

        self.map = Some(binding.map);
        self.color = WHITE;
        self.transparent = binding.transparent;
        self.blend_mode = binding.blend_mode;
        self.depth_write = binding.depth_write;
        self.needs_update = true;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::unbound()
    }
}

/// A complete replacement binding, computed before any material is touched.
#[derive(Debug)]
pub struct MaterialBinding {
    pub map: TextureMap,
    pub transparent: bool,
    pub blend_mode: BlendMode,
    pub depth_write: bool,
}

impl MaterialBinding {
    /// Derive render flags from the extension of the file actually bound,
    /// not the one the model requested.
    ///
    /// OZT and TGA carry a usable alpha channel and draw blended without
    /// depth writes; every other format draws opaque.
    pub fn for_extension(ext: &str, map: TextureMap) -> Self {
        if matches!(ext, "ozt" | "tga") {
            Self {
                map,
                transparent: true,
                blend_mode: BlendMode::Normal,
                depth_write: false,
            }
        } else {
            Self {
                map,
                transparent: false,
                blend_mode: BlendMode::None,
                depth_write: true,
            }
        }
    }
}
