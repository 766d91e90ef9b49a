//! Mask and label array exports.
//!
//! The derived views are dumped as NumPy `.npy` files (one element per
//! pixel, dimensions carried by the header) and optionally as an 8-bit
//! grayscale PNG preview of the boolean mask.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use thiserror::Error;

/// Errors that can occur during mask/label export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing the npy payload
    #[error("npy write error: {0}")]
    Npy(#[from] WriteNpyError),

    /// Failure encoding the PNG preview
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Dump a boolean mask as a `.npy` file.
pub fn save_mask_npy(mask: &Array2<bool>, path: &Path) -> Result<(), ExportError> {
    let writer = BufWriter::new(File::create(path)?);
    mask.write_npy(writer)?;
    log::info!("Saved mask to {}", path.display());
    Ok(())
}

/// Dump a label array as a `.npy` file.
pub fn save_labels_npy(labels: &Array2<u32>, path: &Path) -> Result<(), ExportError> {
    let writer = BufWriter::new(File::create(path)?);
    labels.write_npy(writer)?;
    log::info!("Saved labels to {}", path.display());
    Ok(())
}

/// Save a boolean mask as an 8-bit grayscale PNG (true = 255, false = 0).
pub fn save_mask_png(mask: &Array2<bool>, path: &Path) -> Result<(), ExportError> {
    let (rows, cols) = mask.dim();
    let mut img = GrayImage::new(cols as u32, rows as u32);
    for ((r, c), &inside) in mask.indexed_iter() {
        img.put_pixel(c as u32, r as u32, Luma([if inside { 255 } else { 0 }]));
    }
    img.save(path)?;
    log::info!("Saved mask preview to {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
