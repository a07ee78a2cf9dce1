use std::{fs, io, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use partbin_lib::{Field, fs::config_dir};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{debug, warn};

pub use theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

/// Handle to the front-end's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Presentation preferences, serialized to TOML. Inventory records are never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub version: u16,
    pub theme: Theme,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Columns shown in the parts table, in table order
    pub visible_columns: Vec<Field>,
}

impl GuiConfig {
    /// Load the config file, creating it with defaults if it doesn't exist yet. Any failure
    /// falls back to defaults.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Using default GUI config: {e}");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            debug!("Loaded GUI config from {}", path.display());
            Self::from_toml(&contents)
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path()?, contents)?;

        Ok(())
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
            table: TableConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn is_visible(&self, field: Field) -> bool {
        self.visible_columns.contains(&field)
    }

    /// Show or hide a column. Visible columns always stay in table order.
    pub fn set_visible(&mut self, field: Field, visible: bool) {
        self.visible_columns = Field::iter()
            .filter(|f| {
                if *f == field {
                    visible
                } else {
                    self.visible_columns.contains(f)
                }
            })
            .collect();
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            visible_columns: Field::iter().collect(),
        }
    }
}

fn path() -> Result<PathBuf> {
    Ok(config_dir()?.join(FILE_NAME))
}
