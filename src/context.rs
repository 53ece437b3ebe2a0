//! Per-decode shared state.
//!
//! A [`Context`] lives for exactly one decode. It owns the configuration, the
//! fallback materials built from it and the warning side channel. Building
//! tasks share it through an `Arc`.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    config::Config,
    data_structures::material::ResolvedMaterial,
    error::Warning,
};

/// Materials that are not backed by a record. Built once, shared by `Arc`.
#[derive(Debug)]
pub struct Fallbacks {
    /// Used when a mesh has no resolvable material.
    pub default: Arc<ResolvedMaterial>,
    /// Used for every mesh that carries vertex colours.
    pub vertex_color: Arc<ResolvedMaterial>,
    /// Point clouds with per-point colours.
    pub colored_points: Arc<ResolvedMaterial>,
    /// Point clouds without colours.
    pub points: Arc<ResolvedMaterial>,
    pub track: Arc<ResolvedMaterial>,
}

impl Fallbacks {
    fn new(config: &Config) -> Self {
        Self {
            default: Arc::new(ResolvedMaterial::standard(config.default_material_color)),
            vertex_color: Arc::new(ResolvedMaterial::vertex_color()),
            colored_points: Arc::new(ResolvedMaterial::vertex_color()),
            points: Arc::new(ResolvedMaterial::basic(config.point_color)),
            track: Arc::new(ResolvedMaterial::standard(config.track_color)),
        }
    }
}

#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub fallbacks: Fallbacks,
    warnings: Mutex<Vec<Warning>>,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let fallbacks = Fallbacks::new(&config);
        Self {
            config,
            fallbacks,
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Record a recoverable problem and keep going.
    pub fn warn(&self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }

    /// Drain all warnings recorded so far.
    pub fn take_warnings(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Initialize logging for the current platform.
///
/// Natively this installs `env_logger` (configure with `RUST_LOG`), in the
/// browser it forwards to the console. Calling it twice is harmless.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            log::debug!("Logger already initialized: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::debug!("Logger already initialized: {}", e);
        }
    }
}
