//! Media upload and local image reference rewriting.
//!
//! Articles reference images either by URL (already hosted somewhere) or by a
//! local filename. Local references are uploaded out-of-band and rewritten to
//! their hosted URLs before markdown conversion, so the converter only ever
//! sees URL references. A reference whose upload fails is left untouched and
//! the article still publishes; the image just renders broken until fixed.

use crate::client::WpClient;
use crate::error::Result;
use crate::types::MediaResponse;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::warn;

static IMAGE_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

fn is_remote(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Upload one local file as a media item.
pub async fn upload_file(client: &WpClient, path: &Path) -> Result<MediaResponse> {
    let bytes = fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    client.upload_media(&filename, bytes).await
}

/// Rewrite local image references in `content` to their uploaded URLs.
///
/// Relative targets are resolved against `images_dir`. Remote references pass
/// through unchanged. Uploads happen one at a time, in document order.
pub async fn rewrite_local_images(
    client: &WpClient,
    content: &str,
    images_dir: &Path,
) -> Result<String> {
    let mut rewritten = String::with_capacity(content.len());
    let mut last = 0;

    for caps in IMAGE_REF_RE.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        let alt = &caps[1];
        let target = &caps[2];

        rewritten.push_str(&content[last..whole.start()]);
        if is_remote(target) {
            rewritten.push_str(whole.as_str());
        } else {
            match upload_file(client, &images_dir.join(target)).await {
                Ok(media) => {
                    rewritten.push_str(&format!("![{alt}]({})", media.url));
                }
                Err(error) => {
                    warn!(image = target, %error, "image upload failed, keeping local reference");
                    rewritten.push_str(whole.as_str());
                }
            }
        }
        last = whole.end();
    }

    rewritten.push_str(&content[last..]);
    Ok(rewritten)
}
