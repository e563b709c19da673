use crate::backend::DrawBackend;
use crate::paint::Paint;
use crate::path::{rounded_rect_path, Rect};
use crate::style::BarStyle;

pub(crate) fn slot_width(width: i32, segment_count: u32) -> i32 {
	width / segment_count as i32
}

/// Track pass geometry: one full-height rectangle per slot. The left edge
/// advances by `slot_width + gap` for every slot, so the track spans at
/// most `N * slot_width + (N - 1) * gap` starting from x = 0, with no
/// centering inside the drawable width.
pub fn track_rects(style: &BarStyle, width: i32, height: i32) -> Vec<Rect> {
	let slot_width = slot_width(width, style.segment_count());
	let mut rects = Vec::with_capacity(style.segment_count() as usize);
	let mut left = 0;
	for _ in 0..style.segment_count() {
		rects.push(Rect::new(left, 0, left + slot_width, height));
		left += slot_width + style.segment_gap();
	}
	rects
}

/// Fill pass geometry: one half-slot rectangle per completed half-step.
/// The gap is inserted only after a slot's second half; the two halves of
/// one slot abut.
pub fn fill_rects(style: &BarStyle, completed_half_steps: u32, width: i32, height: i32) -> Vec<Rect> {
	let half_width = slot_width(width, style.segment_count()) / 2;
	let mut rects = Vec::with_capacity(completed_half_steps as usize);
	let mut left = 0;
	for i in 0..completed_half_steps {
		rects.push(Rect::new(left, 0, left + half_width, height));
		let index = i + 1;
		if index >= 2 && index % 2 == 0 {
			left += half_width + style.segment_gap();
		} else {
			left += half_width;
		}
	}
	rects
}

pub(crate) fn draw_track(style: &BarStyle, width: i32, height: i32, backend: &mut dyn DrawBackend) {
	let paint = Paint::fill(style.container_color());
	for rect in track_rects(style, width, height) {
		backend.fill_path(&rounded_rect_path(rect, style.corner_radius()), &paint);
	}
}

pub(crate) fn draw_fill(
	style: &BarStyle,
	completed_half_steps: u32,
	width: i32,
	height: i32,
	backend: &mut dyn DrawBackend,
) {
	let paint = Paint::fill(style.fill_color());
	for rect in fill_rects(style, completed_half_steps, width, height) {
		backend.fill_path(&rounded_rect_path(rect, style.corner_radius()), &paint);
	}
}
