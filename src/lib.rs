//! copy-assets: build-time copying of static CSS and HTML template assets
//! into the `public/` output tree.

pub mod copier;
pub mod error;

pub use copier::{AssetCopier, CopiedFile, CopySummary, derive_template_name};
pub use error::AppError;

/// Copy all static assets for the project rooted at the current directory.
///
/// Convenience entry point for the binary; library callers construct an
/// [`AssetCopier`] with an explicit project root instead.
pub fn run() -> Result<CopySummary, AppError> {
    let copier = AssetCopier::current()?;
    copier.copy_all()
}
