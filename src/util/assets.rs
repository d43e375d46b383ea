use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine};
use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::warn;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const STYLESHEET: &str = "main.css";
const FAVICON: &str = "favicon.svg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset {0} is not embedded")]
    Missing(&'static str),
    #[error("asset {0} is not valid UTF-8")]
    NotUtf8(&'static str),
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Stylesheet for the console. Empty if the embed is broken, so the
/// window still opens unstyled.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| {
        stylesheet().unwrap_or_else(|err| {
            warn!(error = %err, "rendering without stylesheet");
            String::new()
        })
    })
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get_or_init(|| match embedded(FAVICON) {
        Ok(svg) => format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)),
        Err(err) => {
            warn!(error = %err, "rendering without favicon");
            String::new()
        }
    })
}

fn stylesheet() -> Result<String, AssetError> {
    let bytes = embedded(STYLESHEET)?;
    String::from_utf8(bytes.into_owned()).map_err(|_| AssetError::NotUtf8(STYLESHEET))
}

fn embedded(name: &'static str) -> Result<Cow<'static, [u8]>, AssetError> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .ok_or(AssetError::Missing(name))
}
