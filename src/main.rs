// Demo painter for the binary mask brush.
// • Hold Left Mouse to paint, Right Mouse to erase.
// • [ and ] shrink / grow the brush.
// • C clears the mask, V checks that it is still strictly 0/255.
// • ESC quits.

mod app;

use app::cli::Args;
use app::draw::{Drawer, FrameBuffer, composite, draw_brush_ring};
use app::error::AppError;
use clap::Parser;
use mask_brush::{
    BrushMode, BrushSettings, MaskBuffer, StrokeSession, brush_preview, calculate_stroke_bounds,
    continue_stroke, end_stroke, mask_from_luma, stamp, start_stroke,
};
use minifb::Key;
use tracing::{info, warn};

const MASK_TINT: u32 = 0x00_FF_30_90;
const SIZE_STEP: f64 = 2.0;

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    app::logging::init(args.debug);

    /* --- Brush config (fails before any window opens) --- */
    let mut settings = args.load_brush()?;

    /* --- Background: image if given, checkerboard otherwise --- */
    let background = match &args.image {
        Some(path) => FrameBuffer::from_rgb(&image::open(path)?.to_rgb8()),
        None => FrameBuffer::checker(args.width, args.height, 16),
    };
    let (w, h) = (background.width, background.height);

    /* --- The mask the engine paints into; we own it, the engine borrows it --- */
    let mut mask = match &args.mask {
        Some(path) => {
            let luma = image::open(path)?.to_luma8();
            if luma.width() as usize != w || luma.height() as usize != h {
                return Err(AppError::Composite(format!(
                    "mask is {}x{}, canvas is {w}x{h}",
                    luma.width(),
                    luma.height()
                )));
            }
            mask_from_luma(&luma)
        }
        None => vec![0u8; w * h],
    };

    let mut drawer = Drawer::open(w, h)?;
    let mut screen = FrameBuffer::new(w, h);
    let mut session = StrokeSession::new();
    info!(width = w, height = h, size = settings.size, "canvas ready");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.running() {
        /* 1) Keys */
        if drawer.pressed(Key::LeftBracket) {
            let smaller = (settings.size - SIZE_STEP).max(1.0);
            settings.set_size(smaller)?;
        }
        if drawer.pressed(Key::RightBracket) {
            settings.set_size(settings.size + SIZE_STEP)?;
        }
        if drawer.pressed_once(Key::C) {
            MaskBuffer::new(&mut mask, w, h)?.clear();
            info!("mask cleared");
        }
        if drawer.pressed_once(Key::V) {
            if mask_brush::validate(&mask) {
                info!("mask is binary");
            } else {
                warn!("mask has non-binary values");
            }
        }

        /* 2) Pointer: drive the stroke session and stamp what it hands back */
        let pointer = drawer.mouse_pos();
        match (drawer.held_mode(), pointer) {
            (Some(mode), Some(p)) => {
                let mut view = MaskBuffer::new(&mut mask, w, h)?;
                let same_stroke = session.current_stroke().is_some_and(|s| s.mode() == mode);
                if same_stroke {
                    for s in continue_stroke(&mut session, &settings, p)? {
                        stamp(&mut view, s.into(), stroke_diameter(&session, &settings), mode);
                    }
                } else {
                    finish_stroke(&mut session, w, h);
                    settings.set_mode(mode);
                    let first = start_stroke(&mut session, &settings, p)?;
                    stamp(&mut view, first.into(), settings.size, mode);
                }
            }
            _ => finish_stroke(&mut session, w, h),
        }

        /* 3) Compose: background, tinted mask, brush ring */
        composite(&mut screen, &background, &mask, MASK_TINT)?;
        if let Some(p) = pointer {
            draw_brush_ring(&mut screen, &brush_preview(&settings, p));
        }

        let mode = match settings.mode {
            BrushMode::Paint => "paint",
            BrushMode::Erase => "erase",
        };

        /* 4) Present (title bar doubles as the HUD) */
        drawer.present(&screen, &format!("{mode} | size {:.0}", settings.size))?;
    }

    finish_stroke(&mut session, w, h);
    Ok(())
}

/// Diameter of the stroke in progress; the brush may have been resized since it began.
fn stroke_diameter(session: &StrokeSession, settings: &BrushSettings) -> f64 {
    session.current_stroke().map_or(settings.size, |s| s.size())
}

fn finish_stroke(session: &mut StrokeSession, w: usize, h: usize) {
    if let Some(stroke) = end_stroke(session) {
        let bounds = calculate_stroke_bounds(&stroke, w as u32, h as u32);
        info!(points = stroke.points().len(), ?bounds, "stroke finished");
    }
}
