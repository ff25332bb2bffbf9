//! Common utilities for integration tests.
//!
//! The binary resolves its compiled-in paths against the working directory, so
//! each test runs it inside its own scratch directory.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use image::{Rgb, RgbImage};

pub const SOURCE: &str = "assets/icon-base.png";
pub const OUTPUT_DIR: &str = "client/public/icons";
pub const SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

fn get_generator_bin() -> &'static str {
    env!("CARGO_BIN_EXE_generate_icons")
}

/// Fresh, empty working directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!(
        "pwa_icons_integration_{name}_{}",
        std::process::id()
    ));
    drop(fs::remove_dir_all(&dir));
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Writes an opaque RGB base image at the binary's expected source path.
pub fn write_rgb_source(workdir: &Path, size: u32) {
    let path = workdir.join(SOURCE);
    fs::create_dir_all(path.parent().unwrap()).expect("failed to create assets dir");
    RgbImage::from_fn(size, size, |x, y| {
        Rgb([(x * 255 / size) as u8, (y * 255 / size) as u8, 200])
    })
    .save(&path)
    .expect("failed to write source image");
}

/// Runs the generator binary with `workdir` as its working directory.
pub fn run_generator(workdir: &Path, args: &[&str]) -> Output {
    Command::new(get_generator_bin())
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run generate_icons")
}

/// Sorted names of all files in the output directory, empty if it doesn't exist.
pub fn output_files(workdir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(workdir.join(OUTPUT_DIR)) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
