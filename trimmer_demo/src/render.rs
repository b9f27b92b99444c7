// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Software rendering of the canvas into a `0RGB` frame buffer.

use kurbo::Rect;
use trimmer_canvas::{ImageHandle, OverlayFrame, OverlayState, TrimCanvas};

const BACKGROUND: [u8; 3] = [0x20, 0x20, 0x20];

/// Paints the image and the trim overlay into `frame`.
///
/// `frame` is `width * height` pixels in softbuffer's `0RGB` layout.
pub(crate) fn paint(frame: &mut [u32], width: u32, height: u32, canvas: &TrimCanvas<OverlayState>) {
    frame.fill(pack(BACKGROUND));
    if let (Some(image), Some(to_image)) = (canvas.image(), canvas.viewport().screen_to_image_affine()) {
        // Axis-aligned with uniform scale: x only depends on the column, y on the row.
        let [sx, _, _, sy, tx, ty] = to_image.as_coeffs();
        blit(frame, width, height, image, (sx, tx), (sy, ty));
    }
    if let Some(overlay) = canvas.surface().frame() {
        stroke(frame, width, height, overlay);
    }
}

fn blit(
    frame: &mut [u32],
    width: u32,
    height: u32,
    image: &ImageHandle,
    (sx, tx): (f64, f64),
    (sy, ty): (f64, f64),
) {
    let (iw, ih) = (f64::from(image.pixel_width()), f64::from(image.pixel_height()));
    let columns: Vec<Option<u32>> = (0..width)
        .map(|col| texel(sx * (f64::from(col) + 0.5) + tx, iw))
        .collect();
    for (row, line) in (0..height).zip(frame.chunks_exact_mut(width as usize)) {
        let Some(iy) = texel(sy * (f64::from(row) + 0.5) + ty, ih) else {
            continue;
        };
        for (dst, ix) in line.iter_mut().zip(&columns) {
            let Some(ix) = *ix else { continue };
            let src = image.pixels().get_pixel(ix, iy).0;
            *dst = pack(over(src, BACKGROUND));
        }
    }
}

/// Nearest texel index along one axis, or `None` outside `[0, len)`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bounds checked against the image dimension first"
)]
fn texel(coord: f64, len: f64) -> Option<u32> {
    (coord >= 0.0 && coord < len).then(|| coord as u32)
}

fn stroke(frame: &mut [u32], width: u32, height: u32, overlay: &OverlayFrame) {
    // Sub-pixel borders would vanish when rasterized; keep at least one pixel.
    let inset = overlay.border_width.max(1.0);
    let outer = overlay.bounds;
    let inner = outer.inset(-inset);
    let rgba = overlay.border_color.to_rgba8();
    let view = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
    let clipped = outer.intersect(view);
    if clipped.is_zero_area() {
        return;
    }
    let (x0, y0, x1, y1) = pixel_span(clipped);
    for row in y0..y1 {
        let cy = f64::from(row) + 0.5;
        for col in x0..x1 {
            let cx = f64::from(col) + 0.5;
            if inner.contains(kurbo::Point::new(cx, cy)) {
                continue;
            }
            let idx = row as usize * width as usize + col as usize;
            let under = unpack(frame[idx]);
            frame[idx] = pack(over([rgba.r, rgba.g, rgba.b, rgba.a], under));
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "clipped to the frame, which is at most u32 wide"
)]
fn pixel_span(r: Rect) -> (u32, u32, u32, u32) {
    (
        r.x0.floor() as u32,
        r.y0.floor() as u32,
        r.x1.ceil() as u32,
        r.y1.ceil() as u32,
    )
}

fn over(src: [u8; 4], dst: [u8; 3]) -> [u8; 3] {
    let a = u16::from(src[3]);
    let mix = |s: u8, d: u8| {
        let v = (u16::from(s) * a + u16::from(d) * (255 - a) + 127) / 255;
        u8::try_from(v).unwrap_or(u8::MAX)
    };
    [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2])]
}

fn pack([r, g, b]: [u8; 3]) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

fn unpack(px: u32) -> [u8; 3] {
    let [_, r, g, b] = px.to_be_bytes();
    [r, g, b]
}
