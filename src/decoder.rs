//! Decoding pipeline from REX records to a scene graph.
//!
//! The pipeline runs in four stages, each completed before the next one
//! starts:
//!
//! 1. deserialize the raw bytes into a [`RexFile`] (external, see [`RecordDeserializer`])
//! 2. build one [`GeometryBuffer`] per mesh
//! 3. resolve materials (and their diffuse textures) by id
//! 4. assemble the scene graph
//!
//! Stages 2 and 3 are independent per record. [`assemble`] runs them in
//! order, [`assemble_parallel`] fans them out to the blocking thread pool and
//! joins before stage 4. Both produce the same graph.
//!
//! The graph is a group root with one child per placed mesh, followed by one
//! child per point list, track and line set. Files with scene node records
//! place meshes explicitly; older files get one identity-placed node per mesh.

use std::sync::Arc;

use instant::Instant;
use log::debug;

use crate::{
    config::Config,
    context::Context,
    data_structures::{
        geometry::GeometryBuffer,
        material::{Color, ResolvedMaterial},
        records::{MeshRecord, RexFile},
        scene_graph::{NodeKind, SceneNode},
        transform::Transform,
    },
    error::{Result, RexError, Warning},
    resources::{
        index_by_id,
        material::MaterialResolver,
        mesh::{build_line_set_geometry, build_mesh_geometry, build_point_geometry, build_track_geometry},
        plane::image_plane_node,
    },
};

/// The low-level REX container parser.
///
/// Implementations turn the binary container into typed record collections.
/// `Ok(None)` means the bytes held no decodable file.
pub trait RecordDeserializer {
    fn deserialize(&self, bytes: &[u8]) -> anyhow::Result<Option<RexFile>>;
}

impl<F> RecordDeserializer for F
where
    F: Fn(&[u8]) -> anyhow::Result<Option<RexFile>>,
{
    fn deserialize(&self, bytes: &[u8]) -> anyhow::Result<Option<RexFile>> {
        self(bytes)
    }
}

/// A finished scene plus everything that was skipped on the way.
#[derive(Clone, Debug)]
pub struct DecodedScene {
    pub root: SceneNode,
    pub warnings: Vec<Warning>,
}

/// Turns REX bytes into a [`DecodedScene`].
pub struct Decoder<D> {
    deserializer: D,
    config: Config,
}

impl<D: RecordDeserializer> Decoder<D> {
    pub fn new(deserializer: D) -> Self {
        Self {
            deserializer,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Decode `bytes` into a scene whose root group is called `name`.
    pub fn decode(&self, bytes: &[u8], name: &str) -> Result<DecodedScene> {
        if bytes.is_empty() {
            return Err(RexError::EmptyInput);
        }
        let started = Instant::now();
        let file = self
            .deserializer
            .deserialize(bytes)
            .map_err(|e| RexError::Deserialize(format!("{e:#}")))?
            .ok_or(RexError::NothingToDecode)?;
        debug!("Deserialized {} bytes in {:?}", bytes.len(), started.elapsed());
        assemble(file, name, &self.config)
    }
}

/// Build the scene graph for `file` on the calling thread.
pub fn assemble(file: impl Into<Arc<RexFile>>, name: &str, config: &Config) -> Result<DecodedScene> {
    let file = file.into();
    let ctx = Arc::new(Context::new(config.clone()));

    let started = Instant::now();
    let meshes = file
        .meshes
        .iter()
        .map(build_mesh_geometry)
        .collect::<Result<Vec<_>>>()?;
    debug!("Built {} mesh geometries in {:?}", meshes.len(), started.elapsed());

    let started = Instant::now();
    let resolver = MaterialResolver::new(Arc::clone(&file), Arc::clone(&ctx));
    resolver.resolve_all();
    debug!("Resolved {} materials in {:?}", file.materials.len(), started.elapsed());

    finish(&file, name, meshes, &resolver, &ctx)
}

/// Build the scene graph for `file`, with one blocking task per mesh and per
/// material. Must be called from within a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub async fn assemble_parallel(
    file: impl Into<Arc<RexFile>>,
    name: &str,
    config: &Config,
) -> Result<DecodedScene> {
    let file = file.into();
    let ctx = Arc::new(Context::new(config.clone()));
    let resolver = Arc::new(MaterialResolver::new(Arc::clone(&file), Arc::clone(&ctx)));
    let started = Instant::now();

    let geometry_tasks = (0..file.meshes.len()).map(|i| {
        let file = Arc::clone(&file);
        tokio::task::spawn_blocking(move || build_mesh_geometry(&file.meshes[i]))
    });
    let material_tasks = file.materials.iter().map(|material| {
        let resolver = Arc::clone(&resolver);
        let id = material.id;
        tokio::task::spawn_blocking(move || {
            resolver.resolve(id);
        })
    });
    let (geometries, materials) = futures::future::join(
        futures::future::join_all(geometry_tasks),
        futures::future::join_all(material_tasks),
    )
    .await;

    let task_failed = |e: tokio::task::JoinError| RexError::Task(e.to_string());
    for joined in materials {
        joined.map_err(task_failed)?;
    }
    let meshes = geometries
        .into_iter()
        .map(|joined| joined.map_err(task_failed).and_then(|built| built))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "Built {} geometries and {} materials in parallel in {:?}",
        meshes.len(),
        file.materials.len(),
        started.elapsed()
    );

    finish(&file, name, meshes, &resolver, &ctx)
}

fn finish(
    file: &RexFile,
    name: &str,
    meshes: Vec<GeometryBuffer>,
    resolver: &MaterialResolver,
    ctx: &Context,
) -> Result<DecodedScene> {
    let meshes: Vec<Arc<GeometryBuffer>> = meshes.into_iter().map(Arc::new).collect();
    let mut root = SceneNode::group(name);

    if file.has_scene_nodes() {
        add_scene_nodes(&mut root, file, &meshes, resolver, ctx)?;
    } else {
        add_meshes(&mut root, file, &meshes, resolver, ctx);
    }
    add_point_lists(&mut root, file, ctx)?;
    add_tracks(&mut root, file, ctx);
    add_line_sets(&mut root, file);
    if ctx.config.images_as_planes {
        add_image_planes(&mut root, file, resolver, ctx);
    }

    debug!("Assembled scene '{}' with {} nodes", name, root.children.len());
    Ok(DecodedScene {
        root,
        warnings: ctx.take_warnings(),
    })
}

/// Explicit layout: every scene node record places one mesh.
fn add_scene_nodes(
    root: &mut SceneNode,
    file: &RexFile,
    meshes: &[Arc<GeometryBuffer>],
    resolver: &MaterialResolver,
    ctx: &Context,
) -> Result<()> {
    let mesh_index = index_by_id(&file.meshes, |m| m.id, "mesh", ctx);
    // one material lookup (and at most one warning) per mesh, however often it is placed
    let mut materials: Vec<Option<Arc<ResolvedMaterial>>> = vec![None; meshes.len()];

    for node in &file.scene_nodes {
        let &idx = mesh_index
            .get(&node.geometry_id)
            .ok_or(RexError::MissingGeometry {
                node_id: node.id,
                geometry_id: node.geometry_id,
            })?;
        let mesh = &file.meshes[idx];
        let geometry = Arc::clone(&meshes[idx]);
        let material = Arc::clone(
            materials[idx].get_or_insert_with(|| mesh_material(mesh, &geometry, resolver, ctx)),
        );
        let name = mesh_name(mesh).unwrap_or_else(|| format!("scenenode-{}", node.id));

        root.add_child(
            SceneNode::leaf(name, NodeKind::Mesh, mesh.id, geometry, material)
                .with_transform(Transform::from(node)),
        );
    }
    Ok(())
}

/// Legacy layout: one node per mesh at the origin.
fn add_meshes(
    root: &mut SceneNode,
    file: &RexFile,
    meshes: &[Arc<GeometryBuffer>],
    resolver: &MaterialResolver,
    ctx: &Context,
) {
    for (mesh, geometry) in file.meshes.iter().zip(meshes) {
        let material = mesh_material(mesh, geometry, resolver, ctx);
        let name = mesh_name(mesh).unwrap_or_else(|| format!("mesh-{}", mesh.id));
        root.add_child(SceneNode::leaf(
            name,
            NodeKind::Mesh,
            mesh.id,
            Arc::clone(geometry),
            material,
        ));
    }
}

fn add_point_lists(root: &mut SceneNode, file: &RexFile, ctx: &Context) -> Result<()> {
    for points in &file.point_lists {
        let geometry = build_point_geometry(points)?;
        let material = if geometry.has_vertex_colors() {
            &ctx.fallbacks.colored_points
        } else {
            &ctx.fallbacks.points
        };
        root.add_child(SceneNode::leaf(
            format!("points-{}", points.id),
            NodeKind::Points,
            points.id,
            Arc::new(geometry),
            Arc::clone(material),
        ));
    }
    Ok(())
}

fn add_tracks(root: &mut SceneNode, file: &RexFile, ctx: &Context) {
    for track in &file.tracks {
        root.add_child(SceneNode::leaf(
            format!("track-{}", track.id),
            NodeKind::LineStrip,
            track.id,
            Arc::new(build_track_geometry(track)),
            Arc::clone(&ctx.fallbacks.track),
        ));
    }
}

fn add_line_sets(root: &mut SceneNode, file: &RexFile) {
    for line_set in &file.line_sets {
        let [r, g, b, a] = line_set.color;
        let material = ResolvedMaterial {
            opacity: a,
            ..ResolvedMaterial::basic(Color::new(r, g, b))
        };
        root.add_child(SceneNode::leaf(
            format!("lineset-{}", line_set.id),
            NodeKind::LineStrip,
            line_set.id,
            Arc::new(build_line_set_geometry(line_set)),
            Arc::new(material),
        ));
    }
}

fn add_image_planes(root: &mut SceneNode, file: &RexFile, resolver: &MaterialResolver, ctx: &Context) {
    let referenced = resolver.referenced_images();
    for image in file.images.iter().filter(|i| !referenced.contains(&i.id)) {
        match image_plane_node(image, &ctx.config) {
            Ok(node) => root.add_child(node),
            Err(reason) => ctx.warn(Warning::ImagePlane {
                image_id: image.id,
                reason,
            }),
        }
    }
}

/**
 * Picks the material a mesh is drawn with.
 *
 * Vertex colours win over any assigned material. Otherwise the resolved material is used,
 * or the default material if the id is unassigned (`0` or `NOT_SPECIFIED`) or unknown.
 * Only unknown ids are reported.
 */
fn mesh_material(
    mesh: &MeshRecord,
    geometry: &GeometryBuffer,
    resolver: &MaterialResolver,
    ctx: &Context,
) -> Arc<ResolvedMaterial> {
    if geometry.has_vertex_colors() {
        debug!(
            "Mesh {} carries vertex colors, material {} is not applied",
            mesh.id, mesh.material_id
        );
        return Arc::clone(&ctx.fallbacks.vertex_color);
    }
    if !mesh.has_material() {
        return Arc::clone(&ctx.fallbacks.default);
    }
    resolver.resolve(mesh.material_id).unwrap_or_else(|| {
        ctx.warn(Warning::MissingMaterial {
            mesh_id: mesh.id,
            material_id: mesh.material_id,
        });
        Arc::clone(&ctx.fallbacks.default)
    })
}

fn mesh_name(mesh: &MeshRecord) -> Option<String> {
    mesh.name.clone().filter(|name| !name.is_empty())
}
