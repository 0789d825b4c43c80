use axum::{http::header, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Installable web app manifest
#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

/// Manifest at `/manifest.webmanifest`
pub async fn web_manifest() -> impl IntoResponse {
    let manifest = WebManifest {
        name: "Little Lost Note - A Family Story",
        short_name: "Little Lost Note",
        description: "A digital ebook of the family story Little Lost Note",
        start_url: "/",
        display: "standalone",
        background_color: "#e9eae6",
        theme_color: "#e9eae6",
        icons: vec![ManifestIcon {
            src: "/assets/logo.png",
            sizes: "any",
            mime_type: "image/png",
        }],
    };
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(manifest),
    )
}
