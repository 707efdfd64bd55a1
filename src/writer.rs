// WHY: output serialization for both pipelines plus the all-or-nothing write
// Output is fully rendered in memory first, then written to a sibling temp
// file and renamed, so a failed run never leaves a partial output file.

use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::tokenize::RankedEntry;
use crate::verse::VerseRecord;

pub const MODERNIZED_HEADER: &str = "id,text";
pub const TOKENS_HEADER: &str = "token,verses,ids";

/// Render modernized records as `id,text` CSV; records without an id are dropped
pub fn format_modernized_csv(records: &[VerseRecord]) -> String {
    let mut out = String::with_capacity(records.iter().map(|r| r.id.len() + r.text.len() + 2).sum::<usize>() + 8);
    out.push_str(MODERNIZED_HEADER);
    out.push('\n');
    for record in records.iter().filter(|r| r.has_id()) {
        push_cell(&mut out, &record.id);
        out.push(',');
        push_cell(&mut out, &record.text);
        out.push('\n');
    }
    out
}

/// Render ranked entries as `token,verses,ids` CSV
///
/// The ids cell is always quoted: `"[id1,id2]"`.
pub fn format_token_csv(entries: &[RankedEntry]) -> String {
    let mut out = String::new();
    out.push_str(TOKENS_HEADER);
    out.push('\n');
    for entry in entries {
        push_cell(&mut out, &entry.token);
        out.push(',');
        out.push_str(&entry.count().to_string());
        out.push(',');
        push_quoted(&mut out, &format!("[{}]", entry.verse_ids.join(",")));
        out.push('\n');
    }
    out
}

/// RFC 4180: quote the cell only if it contains `,`, `"`, CR or LF
fn push_cell(out: &mut String, cell: &str) {
    if cell.contains([',', '"', '\n', '\r']) {
        push_quoted(out, cell);
    } else {
        out.push_str(cell);
    }
}

fn push_quoted(out: &mut String, cell: &str) {
    out.reserve(cell.len() + 2);
    out.push('"');
    for c in cell.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

/// Temp file written next to `path` before the final rename
pub fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.partial"))
}

/// Write `contents` to `path` atomically
pub async fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let staging = staging_path(path);
    debug!("Staging output at {}", staging.display());

    if let Err(e) = write_staged(&staging, contents).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(Error::io(&staging, e));
    }
    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(Error::io(path, e));
    }

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

async fn write_staged(staging: &Path, contents: &str) -> std::io::Result<()> {
    let file = tokio::fs::File::create(staging).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
