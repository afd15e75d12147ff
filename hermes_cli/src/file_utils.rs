use std::path::{Path, PathBuf};

/// Every `.json` file under `folder_path`, sorted.
pub fn read_json_files(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if path.extension().is_some_and(|extension| extension == "json") {
                files.push(path);
            }
        } else if path.is_dir() {
            files.extend(read_json_files(&path)?);
        }
    }

    files.sort();

    Ok(files)
}
