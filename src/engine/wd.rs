//! Working-directory primitives.
//!
//! The untyped filesystem view outside `.gitlet/` — read here, never a
//! persistent engine state. Only plain files directly inside the working
//! directory are considered; `.gitlet/` itself and subdirectories are never
//! listed (Gitlet has no subdirectory trees, matching the flat `Tree`
//! mapping in the data model).

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// List the plain file names directly inside `working_dir`, excluding
/// `.gitlet`.
pub fn list_files(working_dir: &Path) -> io::Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(working_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name != ".gitlet" {
                names.insert(name.to_owned());
            }
        }
    }
    Ok(names)
}

/// Read the bytes of `working_dir/name`.
pub fn read_file(working_dir: &Path, name: &str) -> io::Result<Vec<u8>> {
    fs::read(working_dir.join(name))
}

/// Whether `working_dir/name` exists as a plain file.
pub fn file_exists(working_dir: &Path, name: &str) -> bool {
    working_dir.join(name).is_file()
}

/// Write `content` to `working_dir/name`, creating or overwriting it.
pub fn write_file(working_dir: &Path, name: &str, content: &[u8]) -> io::Result<()> {
    fs::write(working_dir.join(name), content)
}

/// Delete `working_dir/name`. Missing is not an error.
pub fn delete_file(working_dir: &Path, name: &str) -> io::Result<()> {
    match fs::remove_file(working_dir.join(name)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
