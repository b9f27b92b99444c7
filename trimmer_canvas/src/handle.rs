// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded image handle.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{ImageReader, RgbaImage};
use kurbo::Size;

use crate::error::LoadError;

/// A decoded RGBA8 image, shared and immutable.
///
/// The size is always the pixel size of the decoded buffer; any display
/// density metadata in the file is ignored. Cloning is cheap.
#[derive(Clone)]
pub struct ImageHandle {
    pixels: Arc<RgbaImage>,
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("pixel_width", &self.pixel_width())
            .field("pixel_height", &self.pixel_height())
            .finish_non_exhaustive()
    }
}

impl ImageHandle {
    /// Wraps an already decoded buffer.
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Opens and decodes the file at `path`, sniffing the format from its contents.
    ///
    /// # Errors
    ///
    /// [`LoadError::Unreadable`] if the file cannot be opened or read, and
    /// [`LoadError::InvalidImageFile`] if the decoder rejects it.
    pub fn decode(path: &Path) -> Result<Self, LoadError> {
        let unreadable = |source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        let reader = ImageReader::open(path)
            .map_err(unreadable)?
            .with_guessed_format()
            .map_err(unreadable)?;
        let decoded = reader
            .decode()
            .map_err(|source| LoadError::InvalidImageFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_rgba(decoded.into_rgba8()))
    }

    /// Width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel size as a `kurbo::Size`.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.pixel_width()), f64::from(self.pixel_height()))
    }

    /// The decoded RGBA8 buffer.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Returns `true` if both handles share the same buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}
