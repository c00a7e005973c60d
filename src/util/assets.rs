use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(path)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}
