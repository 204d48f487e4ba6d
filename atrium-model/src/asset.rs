use std::fmt::{self, Display, Formatter};

use crate::error::{ModelError, Result};

/// Identity of a preloadable media asset.
///
/// The id is the asset's site-relative path (e.g. `"image1.jpg"`). Completion
/// bookkeeping is keyed on this identity rather than a bare counter, so a
/// duplicate completion report for the same asset is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(String);

impl AssetId {
    pub fn new(path: impl Into<String>) -> Self {
        AssetId(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(path: &str) -> Self {
        AssetId::new(path)
    }
}

/// Simple enum for asset kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetKind {
    /// Decoded and rendered
    Image,
    /// Availability-checked only, never decoded
    Video,
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Video => write!(f, "video"),
        }
    }
}

/// Terminal load state of an asset. `Failed` still settles the asset for
/// readiness purposes; the gate optimizes for revealing the page, not for the
/// asset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

impl AssetStatus {
    /// Whether this status counts toward the readiness total.
    pub fn is_settled(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// A single preloadable resource: identity plus kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDescriptor {
    pub id: AssetId,
    pub kind: AssetKind,
}

impl AssetDescriptor {
    pub fn image(path: impl Into<String>) -> Self {
        AssetDescriptor {
            id: AssetId::new(path),
            kind: AssetKind::Image,
        }
    }

    pub fn video(path: impl Into<String>) -> Self {
        AssetDescriptor {
            id: AssetId::new(path),
            kind: AssetKind::Video,
        }
    }

    /// Resolve the descriptor against the serving base, e.g.
    /// `https://cdn.example.com/` + `image1.jpg`.
    pub fn resolve_url(&self, base: &str) -> Result<String> {
        let base = url::Url::parse(base)
            .map_err(|e| ModelError::InvalidAsset(format!("bad base url {base}: {e}")))?;
        let resolved = base
            .join(self.id.as_str())
            .map_err(|e| ModelError::InvalidAsset(format!("bad asset path {}: {e}", self.id)))?;
        Ok(resolved.into())
    }
}
