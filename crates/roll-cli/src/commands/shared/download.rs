use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::notify::surfaced;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct DownloadResponse {
    file_id: i64,
    path: String,
    bytes: u64,
}

/// Stream file `file_id` to `target`, or to the server-suggested name inside
/// `general.download_dir`.
pub async fn run(
    file_id: i64,
    target: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let scope = ctx.view();
    let download = ctx
        .client
        .start_download(&ctx.session, file_id, &scope)
        .await
        .map_err(surfaced)?;

    let path = target.map_or_else(
        || default_target(&ctx.config.general.download_dir, download.filename.as_deref(), file_id),
        Path::to_path_buf,
    );
    let mut file = tokio::fs::File::create(&path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;

    let progress = Progress::download(download.total, &format!("downloading {}", path.display()));
    let written = download
        .write_to(&mut file, &scope, |bytes| progress.set_position(bytes))
        .await;
    let bytes = match written {
        Ok(bytes) => {
            progress.finish_clear();
            bytes
        }
        Err(error) => {
            progress.finish_err("download failed");
            let _ = tokio::fs::remove_file(&path).await;
            return Err(surfaced(error));
        }
    };

    tracing::info!(file_id, path = %path.display(), bytes, "download complete");
    output(
        &DownloadResponse {
            file_id,
            path: path.display().to_string(),
            bytes,
        },
        flags.format,
    )
}

fn default_target(dir: &str, server_name: Option<&str>, file_id: i64) -> PathBuf {
    // Only the final component of the server name is used.
    let name = server_name
        .and_then(|name| Path::new(name).file_name())
        .map_or_else(|| PathBuf::from(format!("file-{file_id}")), PathBuf::from);
    if dir.trim().is_empty() {
        name
    } else {
        Path::new(dir).join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::default_target;
    use std::path::PathBuf;

    #[test]
    fn uses_server_name_in_download_dir() {
        assert_eq!(
            default_target("/tmp/dl", Some("slides.pdf"), 3),
            PathBuf::from("/tmp/dl/slides.pdf")
        );
    }

    #[test]
    fn strips_directories_from_server_name() {
        assert_eq!(
            default_target("", Some("../../etc/passwd"), 3),
            PathBuf::from("passwd")
        );
    }

    #[test]
    fn falls_back_to_file_id() {
        assert_eq!(default_target("", None, 42), PathBuf::from("file-42"));
    }
}
