//! Build script for the storefront crate.
//!
//! Computes a content hash for the stylesheet so templates can emit
//! cache-busted asset links.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    // Tell Cargo to rerun if main.css changes
    println!("cargo:rerun-if-changed={}", css_path.display());

    // Hash the CSS content; first 8 hex chars are enough for cache busting.
    // Sets `CSS_HASH` for use with `env!("CSS_HASH")`.
    let hash = match fs::read(&css_path) {
        Ok(content) => {
            let digest = Sha256::digest(&content);
            format!("{digest:x}").chars().take(8).collect::<String>()
        }
        Err(e) => {
            // CSS might not exist yet during initial build
            println!("cargo:warning=Could not read main.css: {e}");
            String::new()
        }
    };

    println!("cargo:rustc-env=CSS_HASH={hash}");
}
