use std::any::Any;

use directory_states::State;
use serde::Deserialize;

use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Longest accepted quiet period.
pub const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Raw environment variables, every field optional.
#[derive(Debug, Deserialize)]
struct RawConfig {
    directory_asset_root: Option<String>,
    directory_dataset_path: Option<String>,
    directory_debounce_ms: Option<u64>,
    directory_page_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    asset_root: String,
    dataset_path: Option<String>,
    debounce_ms: u64,
    page_size: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            asset_root: if cfg!(target_arch = "wasm32") {
                ".".to_owned()
            } else {
                "assets".to_owned()
            },
            dataset_path: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DirectoryConfig {
    /// Reads `DIRECTORY_*` environment variables, falling back to defaults.
    ///
    /// Malformed values are logged and ignored; configuration never fails the app.
    pub fn init() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let raw: Result<RawConfig, _> = serde_env::from_iter(std::env::vars());
            match raw {
                Ok(raw) => Self::from_raw(raw),
                Err(err) => {
                    log::warn!("Invalid directory configuration, using defaults: {err}");
                    Self::default()
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            directory_asset_root,
            directory_dataset_path,
            directory_debounce_ms,
            directory_page_size,
        } = raw;

        let defaults = Self::default();
        let page_size = match directory_page_size {
            Some(0) => {
                log::warn!("DIRECTORY_PAGE_SIZE must be positive, using {DEFAULT_PAGE_SIZE}");
                defaults.page_size
            }
            Some(size) => size,
            None => defaults.page_size,
        };

        let debounce_ms = match directory_debounce_ms {
            Some(ms) if ms > MAX_DEBOUNCE_MS => {
                log::warn!(
                    "DIRECTORY_DEBOUNCE_MS must be at most {MAX_DEBOUNCE_MS}, using {DEFAULT_DEBOUNCE_MS}"
                );
                defaults.debounce_ms
            }
            Some(ms) => ms,
            None => defaults.debounce_ms,
        };

        let config = Self {
            asset_root: directory_asset_root.unwrap_or(defaults.asset_root),
            dataset_path: directory_dataset_path.filter(|path| !path.is_empty()),
            debounce_ms,
            page_size,
        };
        log::info!("Directory configuration resolved: {config:?}");
        config
    }

    pub fn with_asset_root(mut self, asset_root: impl Into<String>) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    /// Sets the quiet period, capped at [`MAX_DEBOUNCE_MS`].
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms.min(MAX_DEBOUNCE_MS);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn asset_root(&self) -> &str {
        &self.asset_root
    }

    pub fn dataset_path(&self) -> Option<&str> {
        self.dataset_path.as_deref()
    }

    pub fn debounce(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.debounce_ms).unwrap_or(i64::MAX))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Resolves a dataset image path against the asset root.
    pub fn image_uri(&self, image: &str) -> String {
        let root = self.asset_root.trim_end_matches('/');
        let image = image.trim_start_matches('/');
        if cfg!(target_arch = "wasm32") {
            format!("{root}/{image}")
        } else {
            format!("file://{root}/{image}")
        }
    }
}

impl State for DirectoryConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
