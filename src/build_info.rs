//! Build metadata generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line description used by `option_demo --version`.
pub fn long_version() -> String {
    let mut line = format!("{} ({} {})", VERSION, GIT_HASH, BUILD_TIME);
    if !BUILD_TAG.is_empty() {
        line.push_str(&format!(" [{}]", BUILD_TAG));
    }
    line
}
