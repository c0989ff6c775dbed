//! File I/O for command scripts and snapshots.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::command::Script;
use crate::common::Result;
use crate::store::{Catalog, Placement};

/// Read a script file and apply it to a fresh catalog.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - Any parse error from [`Script::parse`]
pub fn run_script<P: AsRef<Path>>(path: P, placement: Placement) -> Result<Catalog> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let script = Script::parse(&input)?;

    info!(path = %path.display(), commands = script.len(), ?placement, "running script");
    Ok(script.run(placement))
}

/// Write the catalog's snapshot to `path`, replacing any existing file.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be written.
pub fn write_snapshot<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<()> {
    fs::write(path, catalog.snapshot())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use tempfile::tempdir;

    #[test]
    fn test_run_script_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("restock.in");
        fs::write(&path, "3\nadd 1 7 kettle 6 6\nrestock 7 20\nrestock 17 5\n").unwrap();

        let catalog = run_script(&path, Placement::Home).unwrap();
        let record = catalog.get(7u32).unwrap();
        assert_eq!(record.stock(), 26);
        assert_eq!(record.demand(), 6);
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempdir().unwrap();
        let result = run_script(dir.path().join("missing.in"), Placement::Home);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_write_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("everything.out");

        let mut catalog = Catalog::new();
        catalog.add_product(3u32, "pan", 2, 1, 1);
        write_snapshot(&catalog, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, catalog.snapshot());
        assert!(written.contains("\t[(3: pan, 2S, 1L, 1D)]\n"));
    }
}
