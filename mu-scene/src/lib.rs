//! Mu-Scene: scene-graph types and texture binding
//!
//! The model parser hands over a [`Scene`] whose meshes carry the raw
//! texture reference recorded in the model file and an unbound
//! [`Material`]. [`bind_scene`] resolves each reference against the
//! texture files discovered on disk, decodes the winning file through
//! `mu_tex`, and installs the bitmap plus derived render state into the
//! mesh's material. Per-texture problems are collected as diagnostics in
//! the returned [`BindReport`]; they never abort the pass.
//!
//! # Usage
//!
//! ```ignore
//! use mu_scene::{CandidateSet, bind_scene};
//!
//! let mut scene = parse_model(&bytes)?;
//! let mut candidates = CandidateSet::new();
//! candidates.insert("Data/Item/weapon01.ozj".into());
//!
//! let report = bind_scene(&mut scene, &candidates);
//! println!("bound {} mesh(es)", report.bound);
//! ```

mod bind;
mod material;
mod node;

pub use bind::{BindReport, CandidateSet, Diagnostic, bind_scene};
pub use material::{BlendMode, Material, MaterialBinding, TextureMap};
pub use node::{Group, Mesh, Scene, SceneNode};
