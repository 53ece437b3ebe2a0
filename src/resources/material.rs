//! Material resolution with per-id memoization.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::{
    context::Context,
    data_structures::{
        material::{ResolvedMaterial, ShadingModel, Side},
        records::{MaterialRecord, NOT_SPECIFIED, RexFile},
    },
    resources::{index_by_id, texture::load_texture},
};

type Slot = Arc<OnceLock<Option<Arc<ResolvedMaterial>>>>;

/**
 * Resolves material ids of one file into shared [`ResolvedMaterial`]s.
 *
 * Material and image records are indexed by id once. Each id is resolved at most once,
 * even when several threads ask for it at the same time, so an embedded image is decoded
 * once per material that references it.
 */
pub struct MaterialResolver {
    file: Arc<RexFile>,
    ctx: Arc<Context>,
    materials: HashMap<u64, usize>,
    images: HashMap<u64, usize>,
    resolved: Mutex<HashMap<u64, Slot>>,
}

impl MaterialResolver {
    pub fn new(file: Arc<RexFile>, ctx: Arc<Context>) -> Self {
        let materials = index_by_id(&file.materials, |m| m.id, "material", &ctx);
        let images = index_by_id(&file.images, |i| i.id, "image", &ctx);
        Self {
            file,
            ctx,
            materials,
            images,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve material `id`, `None` if the file has no such material.
    pub fn resolve(&self, id: u64) -> Option<Arc<ResolvedMaterial>> {
        if id == NOT_SPECIFIED {
            return None;
        }
        let slot = {
            let mut resolved = self.resolved.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(resolved.entry(id).or_default())
        };
        slot.get_or_init(|| {
            let record = &self.file.materials[*self.materials.get(&id)?];
            Some(Arc::new(self.build(record)))
        })
        .clone()
    }

    /// Resolve every material of the file in file order.
    pub fn resolve_all(&self) {
        for material in &self.file.materials {
            self.resolve(material.id);
        }
    }

    /// Ids that are referenced as diffuse texture by at least one material.
    pub fn referenced_images(&self) -> HashSet<u64> {
        self.file
            .materials
            .iter()
            .map(|m| m.kd_texture_id)
            .filter(|&id| id != NOT_SPECIFIED)
            .collect()
    }

    fn build(&self, record: &MaterialRecord) -> ResolvedMaterial {
        let diffuse_texture = if record.kd_texture_id != NOT_SPECIFIED {
            let image = self
                .images
                .get(&record.kd_texture_id)
                .map(|&idx| &self.file.images[idx]);
            load_texture(image, record.id, record.kd_texture_id, &self.ctx)
        } else {
            None
        };

        ResolvedMaterial {
            shading: ShadingModel::Standard,
            vertex_colors: false,
            diffuse: record.kd_rgb.into(),
            specular: record.ks_rgb.into(),
            // 0 is "not set" in REX, not a zero exponent
            shininess: (record.ns != 0.0).then_some(record.ns),
            opacity: record.alpha,
            side: Side::Front,
            diffuse_texture,
        }
    }
}
