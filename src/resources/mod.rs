use std::collections::{HashMap, hash_map::Entry};

use crate::{
    config::Config,
    context::Context,
    decoder::{DecodedScene, Decoder, RecordDeserializer},
    error::Warning,
};

/**
 * This module contains all logic for turning records into resources (geometry, textures,
 * materials) and for fetching REX files from disk or the network.
 */
pub mod material;
pub mod mesh;
pub mod normals;
pub mod plane;
pub mod texture;

/// Map record ids to their position in `records`. The first record with an id wins.
pub(crate) fn index_by_id<T>(
    records: &[T],
    id_of: impl Fn(&T) -> u64,
    collection: &'static str,
    ctx: &Context,
) -> HashMap<u64, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let id = id_of(record);
        match index.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(_) => ctx.warn(Warning::DuplicateId { collection, id }),
        }
    }
    index
}

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window available"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin is not accessible"))?;
    let base = reqwest::Url::parse(&format!("{}/", origin))?;
    Ok(base.join(file_name)?)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = tokio::fs::read(std::path::Path::new(file_name)).await?;

    Ok(data)
}

/**
 * Fetches a REX file and decodes it into a scene graph.
 *
 * The root group is named after the file stem. Decoding itself is synchronous, only
 * fetching the bytes is async.
 */
pub async fn load_rex<D: RecordDeserializer>(
    file_name: &str,
    deserializer: D,
    config: Config,
) -> anyhow::Result<DecodedScene> {
    let data = load_binary(file_name).await?;
    let name = std::path::Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    let scene = Decoder::new(deserializer)
        .with_config(config)
        .decode(&data, name)?;
    log::info!(
        "Loaded {} ({} nodes, {} warnings)",
        file_name,
        scene.root.children.len(),
        scene.warnings.len()
    );
    Ok(scene)
}
