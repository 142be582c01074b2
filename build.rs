//! Generates `build_info.rs` for `--version` and tracks the built-in mazes.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const LEVELS_DIR: &str = "levels";

/// Short commit hash: `BUILD_COMMIT` from the environment, else git.
fn commit_hash() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let hash = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if hash.is_empty() {
                "unknown".to_string()
            } else {
                hash
            }
        }
        _ => "unknown".to_string(),
    }
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

/// Level files are embedded with `include_str!`; rebuild when any changes.
fn watch_levels() {
    println!("cargo:rerun-if-changed={}", LEVELS_DIR);
    if let Ok(entries) = fs::read_dir(LEVELS_DIR) {
        for entry in entries.flatten() {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit_hash(),
        build_date()
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    watch_levels();
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
