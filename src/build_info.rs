//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line build identifier used in tool banners, e.g. `0.1.0 (a1b2c3d, 2026-01-23)`.
pub fn build_label() -> String {
    format!("{} ({}, {})", PKG_VERSION, BUILD_COMMIT, BUILD_DATE)
}
