//! Named-resource resolution for the default init.
//!
//! The registry's default entry point loads a fixed file name rather than a
//! caller-supplied path; this module decides where that name resolves on a
//! plain filesystem. Search order, first existing file wins:
//!
//! 1. The path named by the `CONFREG_PROPERTIES` environment variable.
//! 2. The current working directory.
//! 3. The directory containing the current executable.
//! 4. `<config dir>/confreg/` (e.g. `~/.config/confreg/`).

use std::path::PathBuf;

use crate::constants;
use crate::env::Env;

/// Locate a named resource, returning the first existing candidate path.
pub fn locate(name: &str, env: &Env) -> Option<PathBuf> {
    candidates(name, env).into_iter().find(|p| p.is_file())
}

/// Candidate paths in search order.
fn candidates(name: &str, env: &Env) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = env.properties_override() {
        paths.push(explicit);
    }

    paths.push(PathBuf::from(name));

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(name));
        }
    }

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(constants::APP_NAME).join(name));
    }

    paths
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn env_override_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a=1").unwrap();
        file.flush().unwrap();

        let env = Env::overridden(file.path());
        let found = locate("some-other-name.properties", &env).unwrap();
        assert_eq!(found, file.path());
    }

    #[test]
    fn env_override_to_missing_file_falls_through() {
        let env = Env::overridden("/nonexistent/x.properties");
        assert_eq!(locate("confreg-no-such-resource.properties", &env), None);
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let env = Env::empty();
        assert_eq!(locate("confreg-no-such-resource.properties", &env), None);
    }

    #[test]
    fn override_is_first_candidate() {
        let env = Env::overridden("/explicit/override.properties");
        let paths = candidates("x.properties", &env);
        assert_eq!(paths[0], PathBuf::from("/explicit/override.properties"));
        assert_eq!(paths[1], PathBuf::from("x.properties"));
    }
}
