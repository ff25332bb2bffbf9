//! Resizes the base image into the manifest icon set.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use image::{
    ColorType, ExtendedColorType, ImageEncoder as _, ImageError, ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder},
    imageops::{self, FilterType},
};
use tracing::{debug, info};

use crate::{
    config::{IconConfig, TargetSize},
    error::GenerateError,
};

/// An icon that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: TargetSize,
    pub path: PathBuf,
}

/// Filename of the icon for `size`, e.g. `icon-192x192.png`.
#[must_use]
pub fn icon_file_name(size: TargetSize) -> String {
    format!("icon-{size}.png")
}

/// Generates one PNG per configured size and returns them in generation order.
///
/// Sizes are validated before anything touches the filesystem. The output
/// directory is created before the source is decoded, so a decode failure
/// leaves an empty directory behind but no icons.
///
/// # Errors
///
/// Fails on the first invalid size, unreadable source or failed write. Icons
/// written before the failure are kept.
#[tracing::instrument(skip_all, fields(source = %config.source.display(), output_dir = %config.output_dir.display()))]
pub fn generate_icons(config: &IconConfig) -> Result<Vec<GeneratedIcon>, GenerateError> {
    let sizes = config.target_sizes()?;

    fs::create_dir_all(&config.output_dir).map_err(|source| GenerateError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let source = load_source(&config.source)?;

    let mut generated = Vec::with_capacity(sizes.len());
    for size in sizes {
        let file_name = icon_file_name(size);
        let path = config.output_dir.join(&file_name);
        let resized = resize_icon(&source, size);
        write_png(&resized, &path)?;
        info!("Created: {file_name}");
        generated.push(GeneratedIcon { size, path });
    }

    info!("All {} icons generated successfully", generated.len());
    Ok(generated)
}

/// Decodes the image at `path` and converts it to RGBA8.
///
/// The format is detected from the file contents, so the extension does not
/// have to match. Sources without an alpha channel come back fully opaque.
///
/// # Errors
///
/// Returns [`GenerateError::Decode`] if the file cannot be opened or decoded.
pub fn load_source(path: &Path) -> Result<RgbaImage, GenerateError> {
    let decode_err = |source: ImageError| GenerateError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)
        .map_err(decode_err)?
        .decode()
        .map_err(decode_err)?;

    let color = decoded.color();
    debug!(
        width = decoded.width(),
        height = decoded.height(),
        ?color,
        "Decoded source image"
    );
    if color != ColorType::Rgba8 {
        debug!(?color, "Converting source image to RGBA8");
    }

    Ok(decoded.into_rgba8())
}

/// Resamples `source` to exactly `size`×`size` with a Lanczos3 filter.
///
/// Non-square sources are stretched, not cropped.
#[must_use]
pub fn resize_icon(source: &RgbaImage, size: TargetSize) -> RgbaImage {
    imageops::resize(source, size.get(), size.get(), FilterType::Lanczos3)
}

/// Writes `icon` to `path` as a maximally compressed RGBA PNG, replacing any existing file.
///
/// A failed write leaves no file at `path`, or the previous file if there was one.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] for filesystem failures and
/// [`GenerateError::Encode`] if the encoder rejects the image.
pub fn write_png(icon: &RgbaImage, path: &Path) -> Result<(), GenerateError> {
    persist(path, |writer| {
        PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive)
            .write_image(
                icon.as_raw(),
                icon.width(),
                icon.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|err| GenerateError::from_encoder(path.to_path_buf(), err))
    })
}

/// Hidden sibling of `path` that receives the bytes until they are complete.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".partial");
    path.with_file_name(name)
}

/// Runs `write` against a staging file and renames it onto `path` once it succeeded.
///
/// The staging file is removed on every failure.
fn persist<F>(path: &Path, write: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), GenerateError>,
{
    let staging = staging_path(path);
    let result = write_staged(&staging, path, write);
    if result.is_err() {
        drop(fs::remove_file(&staging));
    }
    result
}

fn write_staged<F>(staging: &Path, path: &Path, write: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), GenerateError>,
{
    let write_err = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    // the handle must be closed before the rename
    {
        let mut writer = BufWriter::new(File::create(staging).map_err(write_err)?);
        write(&mut writer)?;
        writer.flush().map_err(write_err)?;
    }
    fs::rename(staging, path).map_err(write_err)
}
