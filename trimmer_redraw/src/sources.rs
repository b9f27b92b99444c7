// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// The changes that can move a trim overlay.
    ///
    /// A single flag names the trigger of one redraw; a combination is a
    /// subscription filter or the record of what fired since a host last
    /// asked.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RedrawSources: u8 {
        /// A new image became active. The user transform was reset first.
        const IMAGE_LOADED      = 0b0000_0001;
        /// A new trim rectangle was set. Carries the rectangle.
        const TRIM_RECT_CHANGED = 0b0000_0010;
        /// The view changed size.
        const VIEW_RESIZED      = 0b0000_0100;
        /// A zoom or pan changed the user transform.
        const TRANSFORM_CHANGED = 0b0000_1000;
    }
}
