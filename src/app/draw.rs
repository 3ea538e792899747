// Window + software drawing for the demo painter.
// Shows the background with the mask tinted on top, plus a ring where the
// next stamp would land.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use mask_brush::{BrushMode, BrushPreview, Point};

use super::error::AppError;

/// 0x00RRGGBB pixels as minifb wants them.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Neutral checkerboard used when no background image is given.
    pub fn checker(width: usize, height: usize, cell: usize) -> Self {
        let mut fb = Self::new(width, height);
        let cell = cell.max(1);
        for y in 0..height {
            for x in 0..width {
                let dark = ((x / cell) + (y / cell)) % 2 == 0;
                fb.pixels[y * width + x] = if dark { 0x00_55_55_55 } else { 0x00_77_77_77 };
            }
        }
        fb
    }

    pub fn from_rgb(img: &image::RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect();
        Self { width: w as usize, height: h as usize, pixels }
    }
}

/// The demo window. Owns the minifb handle; everything else is plain buffers.
pub struct Drawer {
    window: Window, // shows `screen` after each `present`
}

impl Drawer {
    /// Visual: an empty window titled "Mask Brush" opens at canvas size.
    pub fn open(width: usize, height: usize) -> Result<Self, AppError> {
        Window::new("Mask Brush", width, height, WindowOptions::default())
            .map(|window| Self { window })
            .map_err(|e| AppError::WindowInit(e.to_string()))
    }

    /// Push a finished frame and refresh the HUD line in the title bar.
    /// Visual: the tinted mask and brush ring appear; the title shows mode/size.
    pub fn present(&mut self, frame: &FrameBuffer, hud: &str) -> Result<(), AppError> {
        self.window.set_title(&format!("Mask Brush | {hud}"));
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| AppError::WindowUpdate(e.to_string()))
    }

    /// False once the window is closed or ESC is held.
    pub fn running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Sub-pixel pointer position, `None` while outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Point::new(x as f64, y as f64))
    }

    /// Which brush mode the held mouse button asks for (left paints, right erases).
    pub fn held_mode(&self) -> Option<BrushMode> {
        if self.window.get_mouse_down(MouseButton::Left) {
            Some(BrushMode::Paint)
        } else if self.window.get_mouse_down(MouseButton::Right) {
            Some(BrushMode::Erase)
        } else {
            None
        }
    }

    /// Key held, with OS auto-repeat (used for brush resizing).
    pub fn pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::Yes)
    }

    /// Key went down this frame; no repeat (used for one-shot commands).
    pub fn pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }
}

/// Copy `background` into `screen`, mixing `tint` 50/50 wherever the mask is set.
pub fn composite(
    screen: &mut FrameBuffer,
    background: &FrameBuffer,
    mask: &[u8],
    tint: u32,
) -> Result<(), AppError> {
    if screen.width != background.width || screen.height != background.height {
        return Err(AppError::Composite("screen/background size mismatch".into()));
    }
    if mask.len() != screen.pixels.len() {
        return Err(AppError::Composite("mask size mismatch".into()));
    }

    for ((dst, &src), &m) in screen.pixels.iter_mut().zip(&background.pixels).zip(mask) {
        *dst = if m == 0 { src } else { mix_half(src, tint) };
    }
    Ok(())
}

#[inline]
fn mix_half(a: u32, b: u32) -> u32 {
    // average each channel without carrying between them
    ((a & 0x00_FE_FE_FE) >> 1) + ((b & 0x00_FE_FE_FE) >> 1)
}

/// Draw the preview ring: white for paint, red for erase.
/// Ring pixels off the screen are dropped, like stamp pixels off the mask.
pub fn draw_brush_ring(fb: &mut FrameBuffer, preview: &BrushPreview) {
    let color = match preview.mode {
        BrushMode::Paint => 0x00_FF_FF_FF,
        BrushMode::Erase => 0x00_FF_40_40,
    };
    for p in preview.outline() {
        let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
            continue; // left of / above the screen
        };
        if x < fb.width && y < fb.height {
            fb.pixels[y * fb.width + x] = color;
        }
    }
}
