use std::{ops::RangeInclusive, time::Duration};

use ratatui::layout::Rect;

use crate::engine::SpawnedTile;

/// Seconds a freshly spawned tile takes to grow to full size.
pub const POPUP_SECS: f32 = 0.3;

/// Visual-only grow-in effect for the tile placed after a move.
#[derive(Debug, Clone, Copy)]
pub struct Popup {
    pub tile: SpawnedTile,
    pub elapsed: Duration,
}

impl Popup {
    pub fn new(tile: SpawnedTile) -> Self {
        Self {
            tile,
            elapsed: Duration::default(),
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed.as_secs_f32() >= POPUP_SECS
    }

    pub fn scale(&self) -> f32 {
        exp_out(2.0, 10.0, inverse_lerp(0.0..=POPUP_SECS, self.elapsed.as_secs_f32()))
    }
}

#[inline]
pub fn exp_out(value: f32, power: f32, a: f32) -> f32 {
    let min = value.powf(-power);
    let scale = 1.0 / (1.0 - min);

    1.0 - (value.powf(-power * a) - min) * scale
}

#[inline]
pub fn inverse_lerp(range: RangeInclusive<f32>, value: f32) -> f32 {
    let min = *range.start();
    let max = *range.end();
    if min == max {
        1.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn lerpf(range: impl Into<RangeInclusive<f32>>, t: f32) -> f32 {
    let range = range.into();
    (1.0 - t) * *range.start() + t * *range.end()
}

/// Shrinks or grows `rect` around its centre.
pub fn rect_scale(rect: Rect, factor: f32) -> Rect {
    if factor < 0.0 || !factor.is_finite() {
        return rect;
    }

    let new_width = ((rect.width as f32) * factor).round() as u16;
    let new_height = ((rect.height as f32) * factor).round() as u16;

    let center_x = rect.x as f32 + rect.width as f32 / 2.0;
    let center_y = rect.y as f32 + rect.height as f32 / 2.0;

    let new_x = (center_x - new_width as f32 / 2.0).round() as i32;
    let new_y = (center_y - new_height as f32 / 2.0).round() as i32;

    if new_x < 0 || new_x > u16::MAX as i32 || new_y < 0 || new_y > u16::MAX as i32 {
        return rect;
    }

    Rect {
        x: new_x as u16,
        y: new_y as u16,
        width: new_width,
        height: new_height,
    }
}
