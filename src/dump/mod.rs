use crate::{Error, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one dump pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    /// Files whose content made it into the output.
    pub files: usize,
    /// Files replaced by an inline error note.
    pub errors: usize,
}

/// Markdown language tag for a file extension (without the dot).
///
/// Unknown extensions map to the empty string, which produces an untagged
/// fence rather than an error.
pub fn language_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rb" => "ruby",
        "php" => "php",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "xml" => "xml",
        "md" => "markdown",
        "sh" => "bash",
        "yaml" | "yml" => "yaml",
        "kt" => "kotlin",
        "swift" => "swift",
        _ => "",
    }
}

/// Write every regular file under `source` into one text file: a header with
/// the relative path, the content in a fenced code block tagged by extension,
/// and a separator. A file that cannot be read gets an inline error note and
/// the walk continues; per-file failures never abort the batch.
pub fn dump_directory(source: &Path, output: &Path) -> Result<DumpSummary> {
    if !source.is_dir() {
        return Err(Error::dump(format!(
            "'{}' is not a valid directory",
            source.display()
        )));
    }

    let mut paths = Vec::new();
    collect_files(source, &mut paths)?;

    let mut out = BufWriter::new(fs::File::create(output)?);
    let mut summary = DumpSummary { files: 0, errors: 0 };

    for path in &paths {
        let relative = path.strip_prefix(source).unwrap_or(path);
        writeln!(out, "## 文件名：{}\n", relative.display())?;

        match fs::read_to_string(path) {
            Ok(content) => {
                let language = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(language_for_extension)
                    .unwrap_or("");
                writeln!(out, "```{}", language)?;
                out.write_all(content.as_bytes())?;
                writeln!(out, "\n```\n")?;
                summary.files += 1;
            }
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                writeln!(out, "无法读取文件内容或处理文件时出错：{}\n", e)?;
                summary.errors += 1;
            }
        }

        writeln!(out, "---\n")?;
    }

    out.flush()?;

    info!(
        "Dump complete: {} files, {} unreadable, written to {}",
        summary.files,
        summary.errors,
        output.display()
    );

    Ok(summary)
}

/// Depth-first walk collecting regular files in a deterministic order.
/// Symlinks are skipped.
fn collect_files(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&path, paths)?;
        } else if file_type.is_file() {
            paths.push(path);
        }
    }

    Ok(())
}
