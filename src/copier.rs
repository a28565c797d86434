//! One-shot copying of static assets into the `public/` output tree.

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// The public output directory, relative to the project root.
pub const PUBLIC_DIR: &str = "public";

/// The CSS output subdirectory, relative to the public directory.
pub const PUBLIC_CSS_SUBDIR: &str = "css";

/// The stylesheet source directory, relative to the project root.
pub const STYLES_DIR: &str = "src/styles";

/// The HTML template source directory, relative to the project root.
pub const TEMPLATES_DIR: &str = "src/templates";

/// Name suffix selecting stylesheet sources.
const CSS_SUFFIX: &str = ".css";

/// Name suffix selecting template sources.
const HTML_SUFFIX: &str = ".html";

/// Literal substring stripped from template names on copy.
const TEMPLATE_MARKER: &str = ".template";

/// A single file placed into the output tree.
#[derive(Debug, Clone)]
pub struct CopiedFile {
    /// Source file name as listed in the source directory.
    pub name: String,
    /// Full destination path the bytes were copied to.
    pub destination: PathBuf,
}

/// Result of a single [`AssetCopier::copy_all`] run.
#[derive(Debug, Default)]
pub struct CopySummary {
    /// Stylesheets copied into `public/css/`.
    pub css: Vec<CopiedFile>,
    /// Templates copied (and renamed) into `public/`.
    pub html: Vec<CopiedFile>,
}

/// Copies static assets from the project source tree into `public/`.
#[derive(Debug, Clone)]
pub struct AssetCopier {
    /// The project root all paths are resolved against.
    root: PathBuf,
}

impl AssetCopier {
    /// Create a copier for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a copier rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Path to the `public/` output directory.
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(PUBLIC_DIR)
    }

    /// Path to the `public/css/` output subdirectory.
    pub fn public_css_dir(&self) -> PathBuf {
        self.public_dir().join(PUBLIC_CSS_SUBDIR)
    }

    /// Path to the `src/styles/` source directory.
    pub fn styles_dir(&self) -> PathBuf {
        self.root.join(STYLES_DIR)
    }

    /// Path to the `src/templates/` source directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Copy all static assets into the output tree.
    ///
    /// Ensures `public/` and `public/css/` exist, mirrors `src/styles/*.css`
    /// into `public/css/`, copies `src/templates/*.html` into `public/` with
    /// the first `.template` marker stripped from each name, and prints one
    /// line per copied file plus a final completion line. A missing source
    /// directory skips its phase; any other filesystem failure aborts the run.
    pub fn copy_all(&self) -> Result<CopySummary, AppError> {
        fs::create_dir_all(self.public_dir())?;
        fs::create_dir_all(self.public_css_dir())?;

        let mut summary = CopySummary::default();
        self.copy_css(&mut summary)?;
        self.copy_templates(&mut summary)?;

        println!("Asset copy complete!");
        Ok(summary)
    }

    /// Mirror `*.css` files from `src/styles/` into `public/css/`.
    fn copy_css(&self, summary: &mut CopySummary) -> Result<(), AppError> {
        let styles_dir = self.styles_dir();
        if !styles_dir.exists() {
            return Ok(());
        }

        let css_dir = self.public_css_dir();
        for entry in fs::read_dir(&styles_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(CSS_SUFFIX) {
                continue;
            }

            let destination = css_dir.join(entry.file_name());
            fs::copy(entry.path(), &destination)?;
            println!("Copied CSS: {} to {}", name, destination.display());
            summary.css.push(CopiedFile { name, destination });
        }

        Ok(())
    }

    /// Copy `*.html` templates from `src/templates/` into `public/`, stripping
    /// the `.template` marker from each destination name.
    fn copy_templates(&self, summary: &mut CopySummary) -> Result<(), AppError> {
        let templates_dir = self.templates_dir();
        if !templates_dir.exists() {
            return Ok(());
        }

        let public_dir = self.public_dir();
        for entry in fs::read_dir(&templates_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(HTML_SUFFIX) {
                continue;
            }

            let destination = public_dir.join(derive_template_name(&name));
            fs::copy(entry.path(), &destination)?;
            println!("Copied HTML: {} to {}", name, destination.display());
            summary.html.push(CopiedFile { name, destination });
        }

        Ok(())
    }
}

/// Destination name for a template: the first occurrence of `.template` is
/// removed; a name without the marker passes through unchanged.
pub fn derive_template_name(name: &str) -> String {
    name.replacen(TEMPLATE_MARKER, "", 1)
}
