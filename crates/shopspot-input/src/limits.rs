//! Accepted ranges for case-stream values.
//!
//! [`InputLimits::default`] matches the published problem bounds. A limits
//! file may override any subset of them; the format is picked from the file
//! extension (`.ron`, `.toml` or `.json`).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shopspot_core::grid::ShopGrid;

// ===========================================================================
// Bounds
// ===========================================================================

/// An inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range. Accepts any parsed integer so
    /// negative input is rejected here rather than by a failed conversion.
    pub fn contains(&self, value: i64) -> bool {
        i64::from(self.min) <= value && value <= i64::from(self.max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}

// ===========================================================================
// InputLimits
// ===========================================================================

/// Ranges the case reader validates raw input against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// City width and height.
    pub grid_size: Bounds,
    /// Number of shops in one case.
    pub shop_count: Bounds,
    /// Number of walking-distance queries in one case.
    pub query_count: Bounds,
    /// A single walking distance.
    pub walk_distance: Bounds,
}

impl InputLimits {
    pub const GRID_SIZE: Bounds = Bounds::new(1, 1000);
    pub const SHOP_COUNT: Bounds = Bounds::new(0, 5105);
    pub const QUERY_COUNT: Bounds = Bounds::new(1, 20);
    pub const WALK_DISTANCE: Bounds = Bounds::new(0, 106);

    /// Check that every range is well formed and that every admitted grid
    /// can be built: never empty, never above [`ShopGrid::MAX_CELLS`] cells.
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("grid_size", self.grid_size),
            ("shop_count", self.shop_count),
            ("query_count", self.query_count),
            ("walk_distance", self.walk_distance),
        ];
        for (name, bounds) in named {
            if bounds.min > bounds.max {
                return Err(format!(
                    "{name} minimum {} exceeds maximum {}",
                    bounds.min, bounds.max
                ));
            }
        }
        if self.grid_size.min == 0 {
            return Err("grid_size minimum must be at least 1".to_string());
        }
        let side = u64::from(self.grid_size.max);
        if side * side > ShopGrid::MAX_CELLS {
            return Err(format!(
                "grid_size maximum {} allows grids above {} cells",
                self.grid_size.max,
                ShopGrid::MAX_CELLS
            ));
        }
        Ok(())
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            grid_size: Self::GRID_SIZE,
            shop_count: Self::SHOP_COUNT,
            query_count: Self::QUERY_COUNT,
            walk_distance: Self::WALK_DISTANCE,
        }
    }
}

// ===========================================================================
// Loading
// ===========================================================================

/// Errors that can occur while loading a limits file.
#[derive(Debug, thiserror::Error)]
pub enum LimitsLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but describes impossible ranges.
    #[error("invalid limits in {file}: {detail}")]
    Invalid { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supported limits file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, LimitsLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(LimitsLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Deserialize `content` in the given format. `file` is only used for error
/// messages.
pub fn deserialize<T: DeserializeOwned>(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<T, LimitsLoadError> {
    let parsed = match format {
        Format::Ron => ron::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|detail| LimitsLoadError::Parse {
        file: file.to_path_buf(),
        detail,
    })
}

/// Read and validate a limits file.
pub fn load_limits(path: &Path) -> Result<InputLimits, LimitsLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let limits: InputLimits = deserialize(&content, format, path)?;
    limits.validate().map_err(|detail| LimitsLoadError::Invalid {
        file: path.to_path_buf(),
        detail,
    })?;
    tracing::debug!(file = %path.display(), ?limits, "loaded input limits");
    Ok(limits)
}
