//! Scene graph and hierarchical scene organization.
//!
//! The decoder emits a tree of [`SceneNode`]s: one group root holding one leaf
//! per placed mesh, point cloud or polyline. Leaves own their geometry and
//! share their material with every other leaf that resolved to the same
//! material record.

use std::sync::Arc;

use crate::data_structures::{
    geometry::GeometryBuffer, material::ResolvedMaterial, transform::Transform,
};

/// How a leaf's geometry is meant to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Pure container without geometry.
    Group,
    /// Indexed triangle list.
    Mesh,
    /// Point cloud.
    Points,
    /// Connected polyline in vertex order.
    LineStrip,
}

/// A positioned instance of geometry and material, or a group of them.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    /// Id of the record this node was built from, `None` for groups.
    pub source_id: Option<u64>,
    pub transform: Transform,
    pub geometry: Option<Arc<GeometryBuffer>>,
    pub material: Option<Arc<ResolvedMaterial>>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group,
            source_id: None,
            transform: Transform::identity(),
            geometry: None,
            material: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(
        name: impl Into<String>,
        kind: NodeKind,
        source_id: u64,
        geometry: Arc<GeometryBuffer>,
        material: Arc<ResolvedMaterial>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            source_id: Some(source_id),
            transform: Transform::identity(),
            geometry: Some(geometry),
            material: Some(material),
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Depth-first search for the first node called `name`, including `self`.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// All nodes below `self` that carry geometry, depth-first.
    pub fn leaves(&self) -> Vec<&SceneNode> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SceneNode>) {
        if self.geometry.is_some() {
            out.push(self);
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// Every node paired with its world transform (parent × local), depth-first.
    pub fn world_transforms(&self) -> Vec<(&SceneNode, Transform)> {
        let mut out = Vec::new();
        self.collect_world_transforms(&Transform::identity(), &mut out);
        out
    }

    fn collect_world_transforms<'a>(
        &'a self,
        parent: &Transform,
        out: &mut Vec<(&'a SceneNode, Transform)>,
    ) {
        let world = parent * &self.transform;
        out.push((self, world));
        for child in &self.children {
            child.collect_world_transforms(&world, out);
        }
    }
}
