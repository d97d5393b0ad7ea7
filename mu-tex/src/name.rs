//! Texture name normalization and extension equivalence
//!
//! Model files request textures by whatever name the artist exported,
//! which rarely matches what sits on disk: a model asking for
//! `weapon01.jpg` is satisfied by `weapon01.ozj` and vice versa. Matching
//! therefore runs on a normalized (base, extension) pair plus an
//! equivalence relation between related formats.

use std::fmt;

/// Extensions the discovery scan and the matcher recognize.
pub const TEXTURE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "tga", "ozj", "ozt"];

/// A normalized texture reference: lowercase base name and extension,
/// with directory components and the dot stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureName {
    pub base: String,
    pub ext: String,
}

impl TextureName {
    /// Normalize any path-like texture reference.
    ///
    /// Both `/` and `\` separators are handled; model files store
    /// Windows-style paths. Normalizing an already-normalized reference
    /// yields it unchanged.
    pub fn from_path(path: &str) -> Self {
        let file = path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(path)
            .to_lowercase();
        match file.rsplit_once('.') {
            Some((base, ext)) => Self {
                base: base.to_string(),
                ext: ext.to_string(),
            },
            None => Self {
                base: file,
                ext: String::new(),
            },
        }
    }
}

impl fmt::Display for TextureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ext.is_empty() {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}.{}", self.base, self.ext)
        }
    }
}

/// Extensions interchangeable with the given one.
///
/// The table is asymmetric as stored (tga lists png but png's row does
/// not list tga), so [`extensions_match`] queries it in both directions.
fn equivalents(ext: &str) -> &'static [&'static str] {
    match ext {
        "jpg" => &["ozj", "jpeg"],
        "jpeg" => &["ozj", "jpg"],
        "ozj" => &["jpg", "jpeg", "png"],
        "png" => &["ozj", "ozt"],
        "tga" => &["ozt", "png"],
        "ozt" => &["tga", "png"],
        _ => &[],
    }
}

/// Whether a candidate file's extension may satisfy a requested one.
pub fn extensions_match(wanted: &str, candidate: &str) -> bool {
    wanted == candidate
        || equivalents(wanted).contains(&candidate)
        || equivalents(candidate).contains(&wanted)
}
