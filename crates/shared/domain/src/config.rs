use crate::kinds::ContentKinds;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub minify: MinifyConfig,
    pub showcase: ShowcaseConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers and layers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where static assets are served from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

/// Which responses get minified and how.
///
/// HTML, CSS and JavaScript are on by default; JSON, XML and SVG are opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Silences warnings about unparsable media types and minifier failures.
    pub suppress_warnings: bool,
    pub html: bool,
    pub css: bool,
    pub js: bool,
    pub json: bool,
    pub xml: bool,
    pub svg: bool,
    pub html_options: HtmlOptions,
    /// Responses whose size hint exceeds this many bytes stream through untouched.
    pub max_body_bytes: Option<usize>,
}

/// HTML minifier knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Keep `<html>`, `<head>` and `<body>` opening tags.
    pub keep_document_tags: bool,
    /// Keep optional closing tags such as `</p>` and `</li>`.
    pub keep_end_tags: bool,
    pub keep_comments: bool,
}

/// Client-side settings of the showcase page, served as-is at `/api/config`.
///
/// `max_retries` and `timeout_ms` are informational; nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ShowcaseConfig {
    pub api_endpoint: String,
    pub max_retries: u32,
    #[serde(rename(serialize = "timeout"))]
    pub timeout_ms: u64,
    pub features: ShowcaseFeatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ShowcaseFeatures {
    pub dark_mode: bool,
    pub animations: bool,
    pub analytics: bool,
}

impl MinifyConfig {
    /// Configuration with every content kind disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self { html: false, css: false, js: false, ..Self::default() }
    }

    /// Configuration with every content kind enabled.
    #[must_use]
    pub fn all() -> Self {
        Self { json: true, xml: true, svg: true, ..Self::default() }
    }

    /// The set of enabled content kinds.
    #[must_use]
    pub fn kinds(&self) -> ContentKinds {
        [
            (self.html, ContentKinds::HTML),
            (self.css, ContentKinds::CSS),
            (self.js, ContentKinds::JS),
            (self.json, ContentKinds::JSON),
            (self.xml, ContentKinds::XML),
            (self.svg, ContentKinds::SVG),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }

    /// Enables or disables the given kinds in one go.
    pub fn set_kinds(&mut self, kinds: ContentKinds, enabled: bool) {
        for (flag, slot) in [
            (ContentKinds::HTML, &mut self.html),
            (ContentKinds::CSS, &mut self.css),
            (ContentKinds::JS, &mut self.js),
            (ContentKinds::JSON, &mut self.json),
            (ContentKinds::XML, &mut self.xml),
            (ContentKinds::SVG, &mut self.svg),
        ] {
            if kinds.contains(flag) {
                *slot = enabled;
            }
        }
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            suppress_warnings: false,
            html: true,
            css: true,
            js: true,
            json: false,
            xml: false,
            svg: false,
            html_options: HtmlOptions::default(),
            max_body_bytes: None,
        }
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { keep_document_tags: true, keep_end_tags: true, keep_comments: false }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.example.com/data".to_owned(),
            max_retries: 3,
            timeout_ms: 5000,
            features: ShowcaseFeatures::default(),
        }
    }
}

impl Default for ShowcaseFeatures {
    fn default() -> Self {
        Self { dark_mode: true, animations: true, analytics: false }
    }
}
