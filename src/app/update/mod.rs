mod core;
mod layout;
mod navigation;
mod scroll;

use std::path::PathBuf;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    ScrollToGallery,
    LoadManifest(PathBuf),
}
