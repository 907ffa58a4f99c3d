//! Embedded SPA bundle.
//!
//! The Trunk output in `dist/` is compiled into the binary. Unknown paths
//! fall back to `index.html` so client-side routes such as `/panic` load
//! the app.

use std::borrow::Cow;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use http::header;
use rust_embed::Embed;

pub const INDEX: &str = "index.html";

#[derive(Embed)]
#[folder = "../../dist/"]
#[allow_missing = true]
struct Assets;

/// Picks the file served for a request path: the file itself when
/// embedded, otherwise the index page.
pub fn resolve<F>(path: &str, lookup: F) -> Option<(&str, Cow<'static, [u8]>)>
where
    F: Fn(&str) -> Option<Cow<'static, [u8]>>,
{
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };
    lookup(path)
        .map(|data| (path, data))
        .or_else(|| lookup(INDEX).map(|data| (INDEX, data)))
}

/// Index is revalidated on every load; bundle files are content-hashed.
fn cache_control(path: &str) -> &'static str {
    if path == INDEX {
        "no-cache"
    } else {
        "public, max-age=31536000, immutable"
    }
}

pub async fn serve_embedded(uri: Uri) -> Response {
    let Some((path, data)) = resolve(uri.path(), |p| Assets::get(p).map(|file| file.data)) else {
        tracing::warn!(path = uri.path(), "no embedded bundle, run trunk build first");
        return StatusCode::NOT_FOUND.into_response();
    };
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        [
            (header::CONTENT_TYPE, mime.as_ref()),
            (header::CACHE_CONTROL, cache_control(path)),
        ],
        data.into_owned(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(path: &str) -> Option<Cow<'static, [u8]>> {
        match path {
            "index.html" => Some(Cow::Borrowed(b"<html></html>")),
            "folio-client-abc123.js" => Some(Cow::Borrowed(b"export {}")),
            _ => None,
        }
    }

    #[test]
    fn test_root_serves_index() {
        let (path, _) = resolve("/", bundle).unwrap();
        assert_eq!(path, INDEX);
    }

    #[test]
    fn test_existing_file() {
        let (path, data) = resolve("/folio-client-abc123.js", bundle).unwrap();
        assert_eq!(path, "folio-client-abc123.js");
        assert_eq!(&*data, b"export {}");
    }

    #[test]
    fn test_client_route_falls_back_to_index() {
        let (path, data) = resolve("/panic", bundle).unwrap();
        assert_eq!(path, INDEX);
        assert_eq!(&*data, b"<html></html>");
    }

    #[test]
    fn test_empty_bundle() {
        assert!(resolve("/anything", |_| None).is_none());
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control(INDEX), "no-cache");
        assert!(cache_control("styles-1f2e.css").contains("immutable"));
    }
}
