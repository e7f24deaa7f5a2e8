//! Font discovery and the fallback chain used to turn a font identifier into something drawable.
//!
//! Resolution never fails: when no candidate file can be loaded the built-in bitmap font is used
//! and a warning is logged.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{debug, warn};

use crate::assets::builtin_font::BuiltinFont;
use crate::assets::text::TextLayoutEngine;
use crate::foundation::error::AnnotateResult;

/// Identifiers offered when discovery finds no font files at all.
pub const FALLBACK_FONT_NAMES: [&str; 4] = ["Arial", "DejaVuSans", "Times New Roman", "Courier New"];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Source of available fonts and of the places to look for them.
pub trait FontDiscovery {
    /// Sorted, de-duplicated font identifiers (file stems) for populating a configuration UI.
    fn font_names(&self) -> Vec<String>;

    /// Directories probed with the font file name after [`FontDiscovery::locate`] fails.
    fn search_dirs(&self) -> Vec<PathBuf>;

    /// Full path of a known font file called `file_name`, if any.
    fn locate(&self, _file_name: &str) -> Option<PathBuf> {
        None
    }
}

/// Discovery over the platform font directories and the system font database.
#[derive(Clone, Debug)]
pub struct SystemFonts {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFonts {
    /// Scan the system once. Later lookups do not touch the font database again.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let mut files = BTreeSet::new();
        for face in db.faces() {
            match &face.source {
                usvg::fontdb::Source::File(p) | usvg::fontdb::Source::SharedFile(p, _) => {
                    files.insert(p.clone());
                }
                usvg::fontdb::Source::Binary(_) => {}
            }
        }
        debug!(faces = db.len(), files = files.len(), "system font database loaded");

        Self {
            dirs: platform_font_dirs(),
            files: files.into_iter().collect(),
        }
    }
}

impl FontDiscovery for SystemFonts {
    fn font_names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.files.iter().filter_map(|p| file_stem(p)).collect();
        names.extend(scan_dirs(&self.dirs));
        finish_names(names)
    }

    fn search_dirs(&self) -> Vec<PathBuf> {
        self.dirs.clone()
    }

    fn locate(&self, file_name: &str) -> Option<PathBuf> {
        self.files
            .iter()
            .find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(file_name))
            })
            .cloned()
    }
}

/// Discovery restricted to an explicit list of directories.
#[derive(Clone, Debug, Default)]
pub struct FontDirs {
    dirs: Vec<PathBuf>,
}

impl FontDirs {
    /// Look only inside `dirs` (non-recursively).
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }
}

impl FontDiscovery for FontDirs {
    fn font_names(&self) -> Vec<String> {
        finish_names(scan_dirs(&self.dirs).collect())
    }

    fn search_dirs(&self) -> Vec<PathBuf> {
        self.dirs.clone()
    }
}

/// Platform font directories, in probing order.
pub fn platform_font_dirs() -> Vec<PathBuf> {
    if cfg!(windows) {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        return vec![PathBuf::from(windir).join("Fonts")];
    }

    let (system, user): (&[&str], &str) = if cfg!(target_os = "macos") {
        (&["/System/Library/Fonts", "/Library/Fonts"], "Library/Fonts")
    } else {
        (&["/usr/share/fonts", "/usr/local/share/fonts"], ".fonts")
    };
    let mut out: Vec<PathBuf> = system.iter().map(PathBuf::from).collect();
    if let Some(home) = dirs::home_dir() {
        out.push(home.join(user));
    }
    out
}

fn file_stem(p: &Path) -> Option<String> {
    p.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
}

fn is_font_file(p: &Path) -> bool {
    p.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

fn scan_dirs(dirs: &[PathBuf]) -> impl Iterator<Item = String> + '_ {
    dirs.iter()
        .filter_map(|d| std::fs::read_dir(d).ok())
        .flat_map(|rd| rd.filter_map(Result::ok))
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_font_file(p))
        .filter_map(|p| file_stem(&p))
}

fn finish_names(names: BTreeSet<String>) -> Vec<String> {
    if names.is_empty() {
        return FALLBACK_FONT_NAMES.iter().map(|s| (*s).to_owned()).collect();
    }
    names.into_iter().collect()
}

/// Font file name tried for identifier `name`.
///
/// A few common family names map to their conventional file names; everything else gets a
/// `.ttf` suffix.
pub fn font_file_name(name: &str) -> String {
    match name {
        "Arial" => "arial.ttf".to_owned(),
        "DejaVuSans" => "DejaVuSans.ttf".to_owned(),
        "Times New Roman" => "times.ttf".to_owned(),
        "Courier New" => "cour.ttf".to_owned(),
        other => format!("{other}.ttf"),
    }
}

/// A scalable font loaded from disk and registered with the layout engine.
#[derive(Clone)]
pub struct OutlineFont {
    pub(crate) family: String,
    pub(crate) data: vello_cpu::peniko::FontData,
    pub(crate) size_px: f32,
    pub(crate) path: PathBuf,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl OutlineFont {
    /// Family name reported by the font file.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// File the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Font chosen for one render call.
#[derive(Clone, Debug)]
pub enum ResolvedFont {
    /// A font file found through the fallback chain.
    Outline(OutlineFont),
    /// The built-in bitmap font.
    Builtin(BuiltinFont),
}

impl ResolvedFont {
    /// Return `true` for the built-in bitmap font.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Outline(f) => format!("{} ({})", f.family, f.path.display()),
            Self::Builtin(b) => format!("built-in bitmap x{}", b.scale()),
        }
    }
}

/// Load and register the font file at `path`.
pub(crate) fn load_font_file(
    engine: &mut TextLayoutEngine,
    path: &Path,
    size_px: u32,
) -> AnnotateResult<OutlineFont> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    let family = engine.register_font(&bytes)?;
    let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
    Ok(OutlineFont {
        family,
        data,
        size_px: size_px as f32,
        path: path.to_path_buf(),
    })
}

/// Resolve `name` to a drawable font.
///
/// Tries, in order: `name` itself as a path, the mapped file name as given (relative to the working
/// directory), the discovery service's index, then every search directory joined with the file
/// name. Falls back to [`BuiltinFont`].
pub(crate) fn resolve_font(
    engine: &mut TextLayoutEngine,
    discovery: &dyn FontDiscovery,
    name: &str,
    size_px: u32,
) -> ResolvedFont {
    let file = font_file_name(name);

    let mut candidates: Vec<PathBuf> = Vec::new();
    let as_path = Path::new(name);
    if is_font_file(as_path) {
        candidates.push(as_path.to_path_buf());
    }
    candidates.push(PathBuf::from(&file));
    candidates.extend(discovery.locate(&file));
    candidates.extend(discovery.search_dirs().into_iter().map(|d| d.join(&file)));

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match load_font_file(engine, &path, size_px) {
            Ok(font) => {
                debug!(font = %font.family, path = %path.display(), "resolved font");
                return ResolvedFont::Outline(font);
            }
            Err(e) => debug!(path = %path.display(), error = %e, "skipping font candidate"),
        }
    }

    warn!("Font {file} not found, using default font");
    ResolvedFont::Builtin(BuiltinFont::for_size(size_px))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
