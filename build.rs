// build.rs - Build information for eel_option

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=EEL_OPTION_BUILD_TAG");

    generate_build_info();
    generate_version_info();
}

fn generate_build_info() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    let git_hash = get_git_hash().unwrap_or_else(|| "unknown".to_string());
    let build_time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let rustc_version = get_rustc_version().unwrap_or_else(|| "unknown".to_string());
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let build_tag = env::var("EEL_OPTION_BUILD_TAG").unwrap_or_default();

    let build_info = format!(
        r#"
pub const GIT_HASH: &str = {:?};
pub const BUILD_TIME: &str = {:?};
pub const RUSTC_VERSION: &str = {:?};
pub const TARGET: &str = {:?};
pub const PROFILE: &str = {:?};
pub const BUILD_TAG: &str = {:?};
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
"#,
        git_hash, build_time, rustc_version, target, profile, build_tag
    );

    fs::write(dest_path, build_info).unwrap();
}

fn generate_version_info() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let major_minor = version.split('.').take(2).collect::<Vec<_>>().join(".");

    println!("cargo:rustc-env=EEL_OPTION_VERSION_MAJOR_MINOR={}", major_minor);
}

fn get_git_hash() -> Option<String> {
    run_and_capture("git", &["rev-parse", "--short", "HEAD"])
}

fn get_rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    run_and_capture(&rustc, &["--version"])
}

fn run_and_capture(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                None
            }
        })
}
