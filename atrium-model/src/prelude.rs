//! Convenience re-exports for downstream crates.

pub use crate::asset::{AssetDescriptor, AssetId, AssetKind, AssetStatus};
pub use crate::content::{self, ContactCard, PageContent, Section, Slide, ValueItem, page_assets};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::route::Route;
