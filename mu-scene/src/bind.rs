//! Texture resolution and binding onto scene materials

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;

use mu_tex::{Bitmap, TextureName, decode_texture, extensions_match};

use crate::material::{MaterialBinding, TextureMap};
use crate::node::Scene;

/// Discovered texture files, keyed by normalized base name.
///
/// Paths keep their discovery order; the first extension-compatible entry
/// wins when a base name is matched.
#[derive(Debug, Default)]
pub struct CandidateSet {
    entries: HashMap<String, Vec<PathBuf>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered file under its normalized base name.
    pub fn insert(&mut self, path: PathBuf) {
        let name = TextureName::from_path(&path.to_string_lossy());
        self.entries.entry(name.base).or_default().push(path);
    }

    /// Candidate files for a base name, in discovery order.
    pub fn paths(&self, base: &str) -> &[PathBuf] {
        self.entries.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All known base names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-texture findings accumulated while binding. None of these abort
/// the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A mesh requested a texture no discovered file satisfies
    NoMatchingTexture { mesh: String, wanted: String },
    /// A discovered texture name no mesh requested
    NoMatchingMesh { name: String },
    /// A matched file could not be read or decoded
    DecodeFailed { path: PathBuf, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoMatchingTexture { mesh, wanted } => {
                write!(f, "mesh '{mesh}': no candidate satisfies '{wanted}'")
            }
            Diagnostic::NoMatchingMesh { name } => {
                write!(f, "texture '{name}' is not referenced by any mesh")
            }
            Diagnostic::DecodeFailed { path, message } => {
                write!(f, "{}: {message}", path.display())
            }
        }
    }
}

/// Outcome of a binding pass.
#[derive(Debug, Default)]
pub struct BindReport {
    /// Number of meshes that received a texture
    pub bound: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl BindReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A texture name's decoded payload, ready to install.
struct Resolved {
    path: PathBuf,
    ext: String,
    bitmap: Bitmap,
}

enum Resolution {
    Bound(Resolved),
    NoCandidate,
    Failed(Diagnostic),
}

/// Resolve and bind one texture per mesh that declares a reference.
///
/// Distinct texture names are resolved and decoded up front, in parallel;
/// decoding has no side effects, so only the subsequent sequential pass
/// touches the scene, installing each mesh's fully-built binding in a
/// single mutation. Failures become diagnostics and never stop the pass.
pub fn bind_scene(scene: &mut Scene, candidates: &CandidateSet) -> BindReport {
    let mut report = BindReport::default();

    // Distinct names requested across the scene.
    let mut wanted: Vec<TextureName> = Vec::new();
    let mut seen = HashSet::new();
    for mesh in scene.meshes() {
        if let Some(reference) = mesh.texture_reference() {
            let name = TextureName::from_path(reference);
            if seen.insert(name.clone()) {
                wanted.push(name);
            }
        }
    }

    let resolved: HashMap<TextureName, Resolution> = wanted
        .par_iter()
        .map(|name| (name.clone(), resolve_texture(name, candidates)))
        .collect();

    // File-level failures are reported once per name, not once per mesh.
    for name in &wanted {
        if let Some(Resolution::Failed(diagnostic)) = resolved.get(name) {
            tracing::warn!("{diagnostic}");
            report.diagnostics.push(diagnostic.clone());
        }
    }

    let mut requested: HashSet<String> = HashSet::new();
    for mesh in scene.meshes_mut() {
        let Some(reference) = mesh.texture_reference() else {
            continue;
        };
        let name = TextureName::from_path(reference);
        requested.insert(name.base.clone());

        match resolved.get(&name) {
            Some(Resolution::Bound(found)) => {
                // Each consuming mesh owns its own copy of the bitmap.
                let map = TextureMap {
                    bitmap: found.bitmap.clone(),
                    source: found.path.clone(),
                };
                mesh.material
                    .install(MaterialBinding::for_extension(&found.ext, map));
                report.bound += 1;
                tracing::debug!("Bound {} -> {}", mesh.name, found.path.display());
            }
            Some(Resolution::NoCandidate) => {
                let diagnostic = Diagnostic::NoMatchingTexture {
                    mesh: mesh.name.clone(),
                    wanted: reference.to_string(),
                };
                tracing::warn!("{diagnostic}");
                report.diagnostics.push(diagnostic);
            }
            Some(Resolution::Failed(_)) | None => {}
        }
    }

    // Discovered names nothing consumed, in stable order.
    let mut unused: Vec<&str> = candidates
        .names()
        .filter(|name| !requested.contains(*name))
        .collect();
    unused.sort_unstable();
    for name in unused {
        report.diagnostics.push(Diagnostic::NoMatchingMesh {
            name: name.to_string(),
        });
    }

    report
}

/// Find the first extension-compatible candidate for a wanted name and
/// decode it.
fn resolve_texture(wanted: &TextureName, candidates: &CandidateSet) -> Resolution {
    let found = candidates.paths(&wanted.base).iter().find(|path| {
        let candidate = TextureName::from_path(&path.to_string_lossy());
        candidate.base == wanted.base && extensions_match(&wanted.ext, &candidate.ext)
    });
    let Some(path) = found else {
        return Resolution::NoCandidate;
    };

    let ext = TextureName::from_path(&path.to_string_lossy()).ext;
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            return Resolution::Failed(Diagnostic::DecodeFailed {
                path: path.clone(),
                message: err.to_string(),
            });
        }
    };

    match decode_texture(&data, &ext) {
        Ok(bitmap) => Resolution::Bound(Resolved {
            path: path.clone(),
            ext,
            bitmap,
        }),
        Err(err) => Resolution::Failed(Diagnostic::DecodeFailed {
            path: path.clone(),
            message: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::BlendMode;
    use crate::node::{Group, Mesh, SceneNode};
    use std::path::Path;
    use tempfile::tempdir;

    fn write_jpg(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([120, 80, 40]));
        img.save(&path).unwrap();
        path
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([120, 80, 40, 255]));
        img.save(&path).unwrap();
        path
    }

    fn write_ozt(dir: &Path, name: &str, width: u16, height: u16) -> PathBuf {
        let path = dir.join(name);
        let mut data = vec![0u8; 22];
        data[16..18].copy_from_slice(&width.to_le_bytes());
        data[18..20].copy_from_slice(&height.to_le_bytes());
        data[20] = 32;
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&[10, 20, 30, 200]); // BGRA
        }
        std::fs::write(&path, &data).unwrap();
        path
    }

    fn scene_of(meshes: Vec<Mesh>) -> Scene {
        Scene {
            root: Group {
                name: "root".into(),
                children: meshes.into_iter().map(SceneNode::Mesh).collect(),
            },
        }
    }

    fn set_of(paths: &[&PathBuf]) -> CandidateSet {
        let mut set = CandidateSet::new();
        for path in paths {
            set.insert((*path).clone());
        }
        set
    }

    #[test]
    fn test_equivalent_extension_binds_opaque() {
        let dir = tempdir().unwrap();
        let jpg = write_jpg(dir.path(), "weapon01.jpg");

        let mut scene = scene_of(vec![Mesh::new("blade", Some("weapon01.ozj".into()))]);
        let report = bind_scene(&mut scene, &set_of(&[&jpg]));

        assert_eq!(report.bound, 1);
        assert!(report.is_clean(), "{:?}", report.diagnostics);

        let mesh = &scene.meshes()[0];
        let map = mesh.material.map.as_ref().unwrap();
        assert_eq!(map.source, jpg);
        assert!(!mesh.material.transparent);
        assert_eq!(mesh.material.blend_mode, BlendMode::None);
        assert!(mesh.material.depth_write);
        assert_eq!(mesh.material.color, [1.0, 1.0, 1.0]);
        assert!(mesh.material.needs_update);
    }

    #[test]
    fn test_alpha_candidate_binds_transparent() {
        let dir = tempdir().unwrap();
        let ozt = write_ozt(dir.path(), "wing.ozt", 2, 2);

        let mut scene = scene_of(vec![Mesh::new("wing", Some("wing.tga".into()))]);
        let report = bind_scene(&mut scene, &set_of(&[&ozt]));

        assert_eq!(report.bound, 1);
        let mesh = &scene.meshes()[0];
        assert!(mesh.material.transparent);
        assert_eq!(mesh.material.blend_mode, BlendMode::Normal);
        assert!(!mesh.material.depth_write);

        // BGRA reordered to RGBA
        let map = mesh.material.map.as_ref().unwrap();
        assert_eq!(&map.bitmap.pixels[0..4], &[30, 20, 10, 200]);
    }

    #[test]
    fn test_missing_texture_leaves_mesh_unbound() {
        let dir = tempdir().unwrap();
        let jpg = write_jpg(dir.path(), "weapon01.jpg");

        let mut scene = scene_of(vec![
            Mesh::new("blade", Some("weapon01.jpg".into())),
            Mesh::new("ghost", Some("missing.png".into())),
        ]);
        let report = bind_scene(&mut scene, &set_of(&[&jpg]));

        assert_eq!(report.bound, 1);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::NoMatchingTexture {
                mesh: "ghost".into(),
                wanted: "missing.png".into(),
            }]
        );
        assert!(scene.meshes()[1].material.map.is_none());
    }

    #[test]
    fn test_incompatible_extension_not_matched() {
        let dir = tempdir().unwrap();
        let ozt = write_ozt(dir.path(), "weapon01.ozt", 1, 1);

        // jpg and ozt are not in the same family
        let mut scene = scene_of(vec![Mesh::new("blade", Some("weapon01.jpg".into()))]);
        let report = bind_scene(&mut scene, &set_of(&[&ozt]));

        assert_eq!(report.bound, 0);
        assert!(matches!(
            report.diagnostics[0],
            Diagnostic::NoMatchingTexture { .. }
        ));
    }

    #[test]
    fn test_first_candidate_in_discovery_order_wins() {
        let dir = tempdir().unwrap();
        let png = write_png(dir.path(), "weapon01.png");
        let jpg = write_jpg(dir.path(), "weapon01.jpg");

        // Both satisfy a request for weapon01.ozj; discovery order decides
        let mut scene = scene_of(vec![Mesh::new("blade", Some("weapon01.ozj".into()))]);
        let report = bind_scene(&mut scene, &set_of(&[&png, &jpg]));

        assert_eq!(report.bound, 1);
        assert_eq!(
            scene.meshes()[0].material.map.as_ref().unwrap().source,
            png
        );
    }

    #[test]
    fn test_unreferenced_candidate_reported() {
        let dir = tempdir().unwrap();
        let png = write_png(dir.path(), "unused.png");

        let mut scene = scene_of(vec![]);
        let report = bind_scene(&mut scene, &set_of(&[&png]));

        assert_eq!(report.bound, 0);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::NoMatchingMesh {
                name: "unused".into()
            }]
        );
    }

    #[test]
    fn test_corrupt_file_does_not_stop_the_pass() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("broken.ozj");
        std::fs::write(&bad, vec![0x5Au8; 64]).unwrap();
        let jpg = write_jpg(dir.path(), "weapon01.jpg");

        let mut scene = scene_of(vec![
            Mesh::new("broken", Some("broken.ozj".into())),
            Mesh::new("blade", Some("weapon01.jpg".into())),
        ]);
        let report = bind_scene(&mut scene, &set_of(&[&bad, &jpg]));

        assert_eq!(report.bound, 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(
            &report.diagnostics[0],
            Diagnostic::DecodeFailed { path, .. } if *path == bad
        ));
        assert!(scene.meshes()[0].material.map.is_none());
        assert!(scene.meshes()[1].material.map.is_some());
    }

    #[test]
    fn test_rebinding_replaces_the_installed_map() {
        let dir = tempdir().unwrap();
        let png = write_png(dir.path(), "weapon01.png");
        let ozt = write_ozt(dir.path(), "weapon01.ozt", 1, 1);

        let mut scene = scene_of(vec![Mesh::new("blade", Some("weapon01.png".into()))]);

        bind_scene(&mut scene, &set_of(&[&png]));
        assert_eq!(
            scene.meshes()[0].material.map.as_ref().unwrap().source,
            png
        );
        assert!(!scene.meshes()[0].material.transparent);

        bind_scene(&mut scene, &set_of(&[&ozt]));
        let mesh = &scene.meshes()[0];
        assert_eq!(mesh.material.map.as_ref().unwrap().source, ozt);
        assert!(mesh.material.transparent);
        assert!(!mesh.material.depth_write);
    }

    #[test]
    fn test_shared_texture_binds_every_consumer() {
        let dir = tempdir().unwrap();
        let jpg = write_jpg(dir.path(), "armor.jpg");

        let mut scene = scene_of(vec![
            Mesh::new("chest", Some("armor.jpg".into())),
            Mesh::new("legs", Some("ARMOR.JPG".into())),
        ]);
        let report = bind_scene(&mut scene, &set_of(&[&jpg]));

        assert_eq!(report.bound, 2);
        assert!(report.is_clean());
        for mesh in scene.meshes() {
            assert!(mesh.material.map.is_some());
        }
    }

    #[test]
    fn test_meshes_without_references_are_skipped() {
        let mut scene = scene_of(vec![
            Mesh::new("bare", None),
            Mesh::new("blank", Some(String::new())),
        ]);
        let report = bind_scene(&mut scene, &CandidateSet::new());

        assert_eq!(report.bound, 0);
        assert!(report.is_clean());
    }
}
