//! Texture conversion to PNG

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::discover;

/// Convert a single texture file to PNG.
pub fn convert_texture(input: &Path, output: &Path) -> Result<()> {
    let data = std::fs::read(input)
        .with_context(|| format!("Failed to read texture: {}", input.display()))?;

    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let bitmap = mu_tex::decode_texture(&data, &ext)
        .with_context(|| format!("Failed to decode texture: {}", input.display()))?;
    let (width, height) = (bitmap.width, bitmap.height);

    let img = image::RgbaImage::from_raw(width, height, bitmap.pixels)
        .context("Decoded bitmap has inconsistent dimensions")?;
    img.save(output)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    tracing::info!("Converted texture: {}x{}", width, height);

    Ok(())
}

/// Convert every discovered texture under `dir` into `out_dir`.
///
/// Failures are collected per file and summarized at the end; one bad
/// file never stops the rest of the batch.
pub fn convert_all(dir: &Path, out_dir: &Path, depth: usize) -> Result<()> {
    let candidates = discover::discover_textures(dir, depth)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir: {}", out_dir.display()))?;

    let mut names: Vec<&str> = candidates.names().collect();
    names.sort_unstable();
    let files: Vec<PathBuf> = names
        .iter()
        .flat_map(|name| candidates.paths(name).iter().cloned())
        .collect();

    let results: Vec<(PathBuf, Result<()>)> = files
        .par_iter()
        .map(|path| {
            let output = png_output_path(out_dir, path);
            (path.clone(), convert_texture(path, &output))
        })
        .collect();

    let mut converted = 0usize;
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(()) => converted += 1,
            Err(err) => failures.push((path, err)),
        }
    }

    println!("Converted {converted} texture(s)");
    if !failures.is_empty() {
        println!("{} file(s) failed:", failures.len());
        for (path, err) in &failures {
            println!("  {}: {:#}", path.display(), err);
        }
    }

    Ok(())
}

/// Flat output path: source stem with a .png extension.
fn png_output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("texture");
    out_dir.join(format!("{stem}.png"))
}
