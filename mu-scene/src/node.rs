//! Typed scene graph produced by the model parser

use crate::material::Material;

/// A node in a parsed model scene.
#[derive(Debug)]
pub enum SceneNode {
    Mesh(Mesh),
    Group(Group),
    /// Cameras, lights, helpers; carried through untouched
    Other(String),
}

/// A named interior node holding child nodes.
#[derive(Debug, Default)]
pub struct Group {
    pub name: String,
    pub children: Vec<SceneNode>,
}

/// A renderable mesh with its material slot.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    /// Raw texture reference from the model file, if the mesh declares one
    pub texture_path: Option<String>,
    pub material: Material,
}

impl Mesh {
    /// A mesh as the model parser constructs it: material unbound.
    pub fn new(name: impl Into<String>, texture_path: Option<String>) -> Self {
        Self {
            name: name.into(),
            texture_path,
            material: Material::unbound(),
        }
    }

    /// The declared texture reference, when present and non-empty.
    pub fn texture_reference(&self) -> Option<&str> {
        self.texture_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// A parsed model scene.
#[derive(Debug, Default)]
pub struct Scene {
    pub root: Group,
}

impl Scene {
    /// Every mesh in the graph, depth-first.
    pub fn meshes(&self) -> Vec<&Mesh> {
        let mut out = Vec::new();
        for child in &self.root.children {
            collect(child, &mut out);
        }
        out
    }

    /// Mutable view of every mesh, depth-first.
    pub fn meshes_mut(&mut self) -> Vec<&mut Mesh> {
        let mut out = Vec::new();
        for child in &mut self.root.children {
            collect_mut(child, &mut out);
        }
        out
    }
}

fn collect<'a>(node: &'a SceneNode, out: &mut Vec<&'a Mesh>) {
    match node {
        SceneNode::Mesh(mesh) => out.push(mesh),
        SceneNode::Group(group) => {
            for child in &group.children {
                collect(child, out);
            }
        }
        SceneNode::Other(_) => {}
    }
}

fn collect_mut<'a>(node: &'a mut SceneNode, out: &mut Vec<&'a mut Mesh>) {
    match node {
        SceneNode::Mesh(mesh) => out.push(mesh),
        SceneNode::Group(group) => {
            for child in &mut group.children {
                collect_mut(child, out);
            }
        }
        SceneNode::Other(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_reaches_nested_meshes() {
        let scene = Scene {
            root: Group {
                name: "root".into(),
                children: vec![
                    SceneNode::Mesh(Mesh::new("body", Some("body.jpg".into()))),
                    SceneNode::Other("light".into()),
                    SceneNode::Group(Group {
                        name: "arm".into(),
                        children: vec![SceneNode::Mesh(Mesh::new("hand", None))],
                    }),
                ],
            },
        };

        let names: Vec<_> = scene.meshes().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["body", "hand"]);
    }

    #[test]
    fn test_texture_reference_filters_empty() {
        assert_eq!(
            Mesh::new("a", Some("skin.ozt".into())).texture_reference(),
            Some("skin.ozt")
        );
        assert_eq!(Mesh::new("b", Some(String::new())).texture_reference(), None);
        assert_eq!(Mesh::new("c", None).texture_reference(), None);
    }
}
