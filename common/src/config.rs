//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default location for the configuration file of a given
//! tool.  This is a configuration struct neutral loading engine, storing only the base
//! directory and with `load()` reading the proper file, the default one or nothing at all.
//!
//! This encapsulates the configuration, available with `.inner()` or `.into_inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::makepath;

/// Config filename
const CONFIG: &str = "config.hcl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown config file {0}")]
    MissingFile(String),
    #[error("Can not read {0}: {1}")]
    Unreadable(String, std::io::Error),
    #[error("Can not parse {0}: {1}")]
    BadSyntax(String, hcl::Error),
    #[error("Bad config file version v{0}, need v{1}")]
    BadVersion(usize, usize),
}

/// Every configuration struct carries a version number we check on load.
///
pub trait Versioned {
    /// Version this code understands.
    const VERSION: usize;

    /// Version found in the file.
    fn version(&self) -> usize;
}

/// Configuration for a CLI tool, found in `$HOME/.config/<tag>/config.hcl` unless told
/// otherwise.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + Default + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    /// File we actually loaded, if any.
    source: Option<PathBuf>,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let basedir = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                debug!("base = {base:?}");
                makepath!(base, tag)
            }
            None => {
                warn!("No home directory found, using current one");
                makepath!(".", tag)
            }
        };
        Self::in_dir(tag, basedir)
    }

    /// Use a specific base directory instead of the user's default one.
    ///
    pub fn in_dir(tag: &str, basedir: PathBuf) -> Self {
        ConfigFile {
            tag: String::from(tag),
            basedir,
            source: None,
            inner: T::default(),
        }
    }

    /// Returns the project tag
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.config_path().join(CONFIG)
    }

    /// Returns the file the configuration was read from, `None` means defaults.
    ///
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load the configuration for `tag`.
    ///
    /// Use the following search path:
    /// - file specified on CLI, which must exist
    /// - default file in basedir (base on $HOME or $LOCALAPPDATA), which may be absent
    ///
    #[tracing::instrument]
    pub fn load(tag: &str, fname: Option<&Path>) -> Result<Self, ConfigError> {
        ConfigFile::<T>::new(tag).read(fname)
    }

    /// Same as `load()` but from an already located base directory.
    ///
    #[tracing::instrument(skip(self))]
    pub fn read(mut self, fname: Option<&Path>) -> Result<Self, ConfigError> {
        let fname = match fname {
            Some(fname) => {
                if !fname.exists() {
                    return Err(ConfigError::MissingFile(fname.display().to_string()));
                }
                fname.to_path_buf()
            }
            None => {
                let def = self.default_file();
                if !def.exists() {
                    debug!("No {def:?}, using defaults");
                    return Ok(self);
                }
                def
            }
        };

        trace!("Loading config file {fname:?}");
        let name = fname.display().to_string();
        let data =
            fs::read_to_string(&fname).map_err(|e| ConfigError::Unreadable(name.clone(), e))?;

        let data: T = hcl::from_str(&data).map_err(|e| ConfigError::BadSyntax(name, e))?;
        debug!("struct data = {data:?}");

        if data.version() != T::VERSION {
            return Err(ConfigError::BadVersion(data.version(), T::VERSION));
        }

        self.inner = data;
        self.source = Some(fname);
        Ok(self)
    }

    /// Return the inner configuration
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume the loader and keep the configuration
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Foo {
        version: usize,
        name: String,
        radius: f64,
    }

    impl Default for Foo {
        fn default() -> Self {
            Foo {
                version: 1,
                name: "default".to_string(),
                radius: 1.0,
            }
        }
    }

    impl Versioned for Foo {
        const VERSION: usize = 1;

        fn version(&self) -> usize {
            self.version
        }
    }

    fn write_config(body: &str) -> NamedTempFile {
        let mut fh = NamedTempFile::new().unwrap();
        write!(fh, "{body}").unwrap();
        fh
    }

    #[test]
    fn test_config_load_file() -> eyre::Result<()> {
        let fh = write_config("version = 1\nname = \"foo\"\nradius = 6371.0\n");

        let cfg = ConfigFile::<Foo>::load("tripmeter-test", Some(fh.path()))?;
        assert_eq!("foo", cfg.inner().name);
        assert_eq!(6371.0, cfg.inner().radius);
        assert_eq!(Some(fh.path()), cfg.source());
        Ok(())
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() -> eyre::Result<()> {
        let fh = write_config("version = 1\nname = \"bar\"\n");

        let cfg = ConfigFile::<Foo>::load("tripmeter-test", Some(fh.path()))?.into_inner();
        assert_eq!("bar", cfg.name);
        assert_eq!(1.0, cfg.radius);
        Ok(())
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let res = ConfigFile::<Foo>::load("tripmeter-test", Some(Path::new("/nonexistent.hcl")));
        assert!(matches!(res, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_config_bad_version() {
        let fh = write_config("version = 2\nname = \"foo\"\n");

        let res = ConfigFile::<Foo>::load("tripmeter-test", Some(fh.path()));
        assert!(matches!(res, Err(ConfigError::BadVersion(2, 1))));
    }

    #[test]
    fn test_config_bad_syntax() {
        let fh = write_config("version = = 1\n");

        let res = ConfigFile::<Foo>::load("tripmeter-test", Some(fh.path()));
        assert!(matches!(res, Err(ConfigError::BadSyntax(_, _))));
    }

    #[test]
    fn test_config_no_default_file() -> eyre::Result<()> {
        let dir = tempdir()?;

        let cfg = ConfigFile::<Foo>::in_dir("tripmeter-test", dir.path().to_path_buf()).read(None)?;
        assert!(cfg.source().is_none());
        assert_eq!(&Foo::default(), cfg.inner());
        Ok(())
    }

    #[test]
    fn test_config_default_file() -> eyre::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(CONFIG), "version = 1\nname = \"home\"\n")?;

        let cfg = ConfigFile::<Foo>::in_dir("tripmeter-test", dir.path().to_path_buf()).read(None)?;
        assert_eq!("home", cfg.inner().name);
        assert_eq!(dir.path().join(CONFIG), cfg.default_file());
        assert_eq!("tripmeter-test", cfg.tag());
        Ok(())
    }
}
