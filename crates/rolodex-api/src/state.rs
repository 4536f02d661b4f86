//! Application state wiring the directory service together.
//!
//! The service is generic over store/renderer/retry traits; AppState pins it
//! to the concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use rolodex_core::retry::FixedDelay;
use rolodex_core::service::directory::DirectoryService;
use rolodex_infra::config::{load_directory_config, resolve_data_dir};
use rolodex_infra::memory::InMemoryUserStore;
use rolodex_infra::render::TemplateCardRenderer;
use rolodex_types::config::DirectoryConfig;

/// Directory service pinned to infra implementations.
pub type ConcreteDirectoryService = DirectoryService<InMemoryUserStore, TemplateCardRenderer>;

/// Shared application state used by the CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ConcreteDirectoryService>,
    pub config: DirectoryConfig,
}

impl AppState {
    /// Load config and seed users, compile the card template, wire the service.
    pub async fn init(data_dir: Option<PathBuf>, seed: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        let config = load_directory_config(&data_dir).await;

        let store = match seed {
            Some(path) => InMemoryUserStore::load_seed(path).await?,
            None => InMemoryUserStore::new(),
        };

        let renderer =
            TemplateCardRenderer::new().context("failed to compile business card template")?;

        let directory = DirectoryService::new(Arc::new(store), renderer)
            .with_retry_policy(FixedDelay::from_config(&config));

        tracing::debug!(
            data_dir = %data_dir.display(),
            retry_delay_secs = config.retry_delay_secs,
            "directory service ready"
        );

        Ok(Self {
            directory: Arc::new(directory),
            config,
        })
    }
}
