//! Sources of variable values.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use tracing::debug;

use crate::error::{Error, Result};

/// Read-only key/value accessor consulted for every `$NAME` reference.
///
/// `None` and `Some("")` are treated the same by the substitution rule.
pub trait Environment {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Variables that are unset or hold non-unicode data are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Variables read from a `.env` file, layered under the process environment.
///
/// Loading never modifies the process environment. Values already present in
/// the process win over the file, the same precedence `dotenvy::dotenv` uses.
#[derive(Debug, Clone, Default)]
pub struct DotenvEnv {
    vars: HashMap<String, String>,
    process_first: bool,
}

impl DotenvEnv {
    /// Load `path`, consulting the process environment before the file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let vars = read_env_file(path.as_ref())?;
        Ok(Self {
            vars,
            process_first: true,
        })
    }

    /// Load `path` and resolve from the file alone.
    pub fn from_file_only(path: impl AsRef<Path>) -> Result<Self> {
        let vars = read_env_file(path.as_ref())?;
        Ok(Self {
            vars,
            process_first: false,
        })
    }

    /// Number of variables defined by the file.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for DotenvEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        if self.process_first
            && let Some(value) = ProcessEnv.lookup(name)
        {
            return Some(value);
        }
        self.vars.get(name).cloned()
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let env_file = |source| Error::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(env_file)? {
        let (key, value) = item.map_err(env_file)?;
        vars.insert(key, value);
    }
    debug!(path = %path.display(), count = vars.len(), "loaded environment file");
    Ok(vars)
}
