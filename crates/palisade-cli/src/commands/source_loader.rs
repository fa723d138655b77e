use std::fs;
use std::io::{self, Read};
use std::path::Path;

use palisade_core::SourceAggregate;

const EXTENSIONS: [&str; 2] = ["graphql", "gql"];

/// Reads every input into one aggregate, one segment per file.
///
/// Inline text wins over files; with neither, stdin is read.
pub fn load_source(
    files: &[impl AsRef<Path>],
    query_text: Option<&str>,
) -> Result<SourceAggregate, String> {
    if let Some(text) = query_text {
        return SourceAggregate::one_liner(text).map_err(|e| e.to_string());
    }

    if files.is_empty() {
        return load_stdin();
    }

    let mut source = SourceAggregate::new();
    for path in files {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            let text = read_stdin()?;
            source
                .add(Some("<stdin>"), &text)
                .map_err(|e| e.to_string())?;
        } else if path.is_dir() {
            add_directory(&mut source, path)?;
        } else {
            add_file(&mut source, path)?;
        }
    }
    Ok(source)
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_stdin() -> Result<SourceAggregate, String> {
    let text = read_stdin()?;
    SourceAggregate::named("<stdin>", &text).map_err(|e| e.to_string())
}

fn add_file(source: &mut SourceAggregate, path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    source
        .add(Some(&path.to_string_lossy()), &content)
        .map_err(|e| format!("failed to add '{}': {}", path.display(), e))?;
    Ok(())
}

fn add_directory(source: &mut SourceAggregate, dir: &Path) -> Result<(), String> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext))
        })
        .collect();

    if entries.is_empty() {
        return Err(format!("no .graphql files found in '{}'", dir.display()));
    }

    // Deterministic segment order.
    entries.sort();

    for path in entries {
        add_file(source, &path)?;
    }
    Ok(())
}
