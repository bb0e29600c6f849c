//! Application entry and setup

use std::collections::BTreeMap;
use std::path::Path;

use crate::bridge::ToolkitHandle;
use crate::colors::Palette;
use crate::config::KitConfig;
use crate::error::KitResult;
use crate::manifest::{self, Library};
use crate::uikit::Screen;

/// Version of the prebuilt toolkit libraries this crate targets
pub const FLTK_VERSION: &str = "1.4.4";

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Toolkit version of the prebuilt libraries
pub fn fltk_version() -> &'static str {
    FLTK_VERSION
}

/// Build the UI with `build`, then enter the toolkit's event loop.
///
/// Returns when the event loop exits.
pub fn run(toolkit: &ToolkitHandle, build: impl FnOnce(&ToolkitHandle)) -> KitResult<()> {
    crate::log_fn!("app::run", "backend={}", toolkit.name());
    build(toolkit);
    toolkit.run()
}

/// Everything resolved during explicit setup
pub struct Kit {
    pub toolkit: ToolkitHandle,
    pub config: KitConfig,
    pub palette: Palette,
    pub screen: Screen,
}

impl Kit {
    /// Load configuration, start logging and resolve the palette.
    ///
    /// With `config_path` the file must load; without it the standard
    /// locations are searched and defaults are used when nothing is found.
    pub fn setup(toolkit: ToolkitHandle, config_path: Option<&Path>) -> KitResult<Self> {
        let config = match config_path {
            Some(path) => KitConfig::load_from_path(path)?,
            None => KitConfig::load(),
        };
        config.init_logging();
        crate::log!(
            "fltkit {} (toolkit {}) on {} backend",
            version(),
            fltk_version(),
            toolkit.name()
        );

        let palette = Palette::load(toolkit.as_ref());
        let screen = Screen::new(toolkit.clone());
        Ok(Self {
            toolkit,
            config,
            palette,
            screen,
        })
    }

    /// Prebuilt bundles under the configured library directory
    pub fn supported_libraries(&self) -> KitResult<BTreeMap<String, Vec<Library>>> {
        Ok(manifest::supported_libraries(&self.config.libs_dir)?)
    }

    /// Build the UI against this kit, then enter the event loop
    pub fn run(&self, build: impl FnOnce(&Kit)) -> KitResult<()> {
        crate::log_fn!("Kit::run", "backend={}", self.toolkit.name());
        build(self);
        self.toolkit.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{HeadlessToolkit, SystemColor};
    use crate::colors::Color;
    use crate::error::KitError;
    use std::cell::Cell;
    use std::io::Write;
    use std::rc::Rc;
    use tempfile::NamedTempFile;

    #[test]
    fn test_versions() {
        assert_eq!(fltk_version(), "1.4.4");
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_run_builds_then_enters_loop() {
        let tk = Rc::new(HeadlessToolkit::new());
        let handle: ToolkitHandle = tk.clone();
        let built = Cell::new(false);

        run(&handle, |_| built.set(true)).unwrap();

        assert!(built.get());
        assert_eq!(tk.run_count(), 1);
    }

    #[test]
    fn test_setup_with_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_row_height = 30").unwrap();
        let tk = HeadlessToolkit::new()
            .with_system_color(SystemColor::Background, Color::rgb(1, 2, 3));

        let kit = Kit::setup(Rc::new(tk), Some(file.path())).unwrap();

        assert_eq!(kit.config.default_row_height, 30);
        assert_eq!(kit.palette.background(), Color::rgb(1, 2, 3));
        assert_eq!(kit.screen.width(), 1440);
    }

    #[test]
    fn test_setup_with_bad_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_row_height = [").unwrap();

        let result = Kit::setup(Rc::new(HeadlessToolkit::new()), Some(file.path()));
        assert!(matches!(result, Err(KitError::Config(_))));
    }

    #[test]
    fn test_kit_supported_libraries_missing_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "libs_dir = {:?}", dir.path().join("none")).unwrap();

        let kit = Kit::setup(Rc::new(HeadlessToolkit::new()), Some(file.path())).unwrap();
        assert!(kit.supported_libraries().unwrap().is_empty());
    }

    #[test]
    fn test_kit_run() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_row_height = 28").unwrap();
        let tk = Rc::new(HeadlessToolkit::new());
        let kit = Kit::setup(tk.clone(), Some(file.path())).unwrap();
        let rows = Cell::new(0);

        kit.run(|kit| rows.set(kit.config.default_row_height)).unwrap();

        assert_eq!(rows.get(), 28);
        assert_eq!(tk.run_count(), 1);
    }
}
