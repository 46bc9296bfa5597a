//! Round-log file helpers.
//!
//! Paths ending in `.zst` are Zstandard frames on both sides: [`open_jsonl_writer`]
//! compresses and [`read_text_auto`] decompresses. Anything else is plain UTF-8.
//! Errors come back as `String` so commands can wrap them in `CliError`.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

fn is_zst(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Read a whole log as text, decompressing `.zst` files and dropping a
/// leading BOM.
///
/// ```rust,no_run
/// # use minutecasino_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("rounds.jsonl").unwrap();
/// let packed = read_text_auto("rounds.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let p = Path::new(path);
    let content = if is_zst(p) {
        let file = File::open(p).map_err(|e| format!("{}: {}", path, e))?;
        let bytes = zstd::stream::decode_all(BufReader::new(file))
            .map_err(|e| format!("{}: {}", path, e))?;
        String::from_utf8(bytes).map_err(|e| format!("{}: {}", path, e))?
    } else {
        std::fs::read_to_string(p).map_err(|e| format!("{}: {}", path, e))?
    };
    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// Create the parent directory of `path` (and its ancestors) when missing.
///
/// ```rust,no_run
/// # use std::path::Path;
/// # use minutecasino_cli::io_utils::ensure_parent_dir;
/// ensure_parent_dir(Path::new("logs/2026/rounds.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e)),
        _ => Ok(()),
    }
}

/// Open a write sink for round records, compressing when the path ends in ".zst".
///
/// Parent directories are created first. The zstd encoder finishes its frame
/// when the returned writer is dropped.
pub fn open_jsonl_writer(path: &Path) -> Result<Box<dyn Write>, String> {
    ensure_parent_dir(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    if is_zst(path) {
        let enc = zstd::stream::write::Encoder::new(file, 3).map_err(|e| e.to_string())?;
        Ok(Box::new(enc.auto_finish()))
    } else {
        Ok(Box::new(file))
    }
}
