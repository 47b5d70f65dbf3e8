//! Decorative banner asset
//!
//! The banner is read once at startup. Any failure is reported and the form
//! carries on without it.

use crate::config::BannerConfig;
use crate::error::StartupError;
use std::path::Path;
use tracing::{info, warn};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A verified banner image, represented on the form by its caption
#[derive(Debug, Clone)]
pub struct Banner {
    pub caption: String,
}

impl Banner {
    /// Read and sanity check the banner image.
    pub fn load(config: &BannerConfig) -> Result<Self, StartupError> {
        let size = check_png(&config.path)?;
        info!(path = %config.path.display(), size = size, "Banner image loaded");

        Ok(Self {
            caption: config.caption.clone(),
        })
    }
}

/// Outcome of loading the banner: the image, or the error to show instead.
#[derive(Debug)]
pub enum BannerStatus {
    Loaded(Banner),
    Unavailable(StartupError),
}

impl BannerStatus {
    /// Load the banner, downgrading failure to a reported status.
    pub fn load(config: &BannerConfig) -> Self {
        match Banner::load(config) {
            Ok(banner) => BannerStatus::Loaded(banner),
            Err(e) => {
                warn!(error = %e, "Continuing without banner image");
                BannerStatus::Unavailable(e)
            }
        }
    }

    pub fn banner(&self) -> Option<&Banner> {
        match self {
            BannerStatus::Loaded(banner) => Some(banner),
            BannerStatus::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StartupError> {
        match self {
            BannerStatus::Loaded(_) => None,
            BannerStatus::Unavailable(e) => Some(e),
        }
    }
}

/// Size of the image in bytes, once its signature checks out
fn check_png(path: &Path) -> Result<usize, StartupError> {
    let banner_error = |reason: String| StartupError::Banner {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| banner_error(e.to_string()))?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(banner_error("not a PNG image".to_string()));
    }

    Ok(bytes.len())
}
