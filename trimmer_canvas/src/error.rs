// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bringing a dropped file into the canvas.
///
/// All of these are local and non-fatal. The canvas keeps whatever image it
/// had before the failing drop.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The drop carried no file paths. Declined silently.
    #[error("no file was dropped")]
    NoFileDropped,

    /// The file was readable but is not a decodable image.
    #[error("invalid image file.")]
    InvalidImageFile {
        /// The dropped path.
        path: PathBuf,
        /// The decoder's error.
        #[source]
        source: image::ImageError,
    },

    /// The file could not be opened.
    #[error("failed to load image: {}", path.display())]
    Unreadable {
        /// The dropped path.
        path: PathBuf,
        /// The I/O error from opening the file.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Returns `true` if a host should surface this error to the user.
    ///
    /// An empty drop is declined without feedback.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::NoFileDropped)
    }

    /// Returns the path involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NoFileDropped => None,
            Self::InvalidImageFile { path, .. } | Self::Unreadable { path, .. } => Some(path),
        }
    }
}
