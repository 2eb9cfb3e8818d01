use clap::{Parser, ValueEnum};
use layout_designer::{KeyValueStore, MemoryStore, Placement, StorageError, Viewport};
use std::path::PathBuf;

use crate::{command::finite, storage::FileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines on stderr, filtered by `RUST_LOG`
    Text,
    /// Structured records
    Json,
}

/// Interactive layout designer
#[derive(Parser, Debug, Clone)]
#[command(name = "layout-designer", version)]
pub struct Config {
    /// Storage namespace; each origin keeps its own saved layout
    #[arg(long, env = "LAYOUT_DESIGNER_ORIGIN", default_value = "default")]
    pub origin: String,

    /// Directory for saved layouts, instead of the platform data directory
    #[arg(long, env = "LAYOUT_DESIGNER_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 1280.0, value_parser = finite)]
    pub viewport_width: f64,

    #[arg(long, default_value_t = 800.0, value_parser = finite)]
    pub viewport_height: f64,

    /// Seed for placing new elements, for repeatable sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the layout in memory only
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    pub fn placement(&self) -> Placement {
        match self.seed {
            Some(seed) => Placement::seeded(self.viewport(), seed),
            None => Placement::from_entropy(self.viewport()),
        }
    }

    pub fn open_storage(&self) -> Result<Box<dyn KeyValueStore>, StorageError> {
        if self.ephemeral {
            log::info!("Using in-memory storage");
            return Ok(Box::new(MemoryStore::new()));
        }

        let store = match &self.storage_dir {
            Some(dir) => FileStore::new_with_dir(&self.origin, dir)?,
            None => FileStore::open(&self.origin)?,
        };
        log::info!("Using storage file {}", store.path().display());

        Ok(Box::new(store))
    }

    pub fn init_logging(&self) {
        match self.log_format {
            LogFormat::Text => {
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                    .init();
            }
            LogFormat::Json => femme::with_level(log::LevelFilter::Info),
        }
    }
}
