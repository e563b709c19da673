use crate::backend::DrawBackend;
use crate::paint::Color;
use crate::render;
use crate::style::BarStyle;

/// Fire-and-forget redraw signal into the host toolkit. The bar never
/// assumes the draw happens immediately, or more than once per request.
pub trait RedrawScheduler {
	fn queue_draw(&self);
}

/// Segmented progress bar state: a validated [`BarStyle`], the completed
/// half-step counter and a single optional completion listener.
///
/// Progress is counted in half-steps; two half-steps fill one slot. The
/// valid range is `0..=2 * segment_count` and every mutator rejects values
/// outside it as a silent no-op.
pub struct SegmentedProgressBar {
	style: BarStyle,
	completed_half_steps: u32,
	pending_fill_px: i32,
	listener: Option<Box<dyn FnMut(u32)>>,
	scheduler: Box<dyn RedrawScheduler>,
}

impl SegmentedProgressBar {
	pub fn new(style: BarStyle, scheduler: Box<dyn RedrawScheduler>) -> Self {
		Self {
			style,
			completed_half_steps: 0,
			pending_fill_px: 0,
			listener: None,
			scheduler,
		}
	}

	/// Advances progress by one half-step. Saturates at
	/// `2 * segment_count`: calls at the bound change nothing and notify
	/// nobody.
	pub fn increment(&mut self) {
		if self.completed_half_steps < self.style.segment_count() * 2 {
			self.apply(self.completed_half_steps + 1);
		}
	}

	/// Sets the absolute half-step count. Values outside
	/// `0..=2 * segment_count` are ignored. Repeated calls with the same
	/// value are not deduplicated; each one queues a redraw and notifies.
	pub fn set_completed(&mut self, value: i32) {
		if value < 0 {
			return;
		}
		if value as u32 <= self.style.segment_count() * 2 {
			self.apply(value as u32);
		}
	}

	fn apply(&mut self, value: u32) {
		self.completed_half_steps = value;
		self.pending_fill_px = 0;
		self.scheduler.queue_draw();
		if let Some(listener) = self.listener.as_mut() {
			listener(value);
		}
	}

	/// Registers the completion listener, replacing any previous one. The
	/// callback runs synchronously inside the mutating call, after the
	/// redraw request, and receives the new half-step count.
	pub fn connect_completed(&mut self, listener: impl FnMut(u32) + 'static) {
		self.listener = Some(Box::new(listener));
	}

	/// Replaces the slot count. Callers must keep `count >= 1`. Existing
	/// progress is left untouched even when it now exceeds the new range;
	/// `set_completed` is the way back into range.
	pub fn set_segment_count(&mut self, count: u32) {
		self.style.set_segment_count(count);
	}

	pub fn set_container_color(&mut self, color: Color) {
		self.style.set_container_color(color);
	}

	pub fn set_fill_color(&mut self, color: Color) {
		self.style.set_fill_color(color);
	}

	pub fn completed_half_steps(&self) -> u32 {
		self.completed_half_steps
	}

	/// Pixel offset of an in-flight half-step animation. Zeroed by every
	/// successful mutation.
	pub fn pending_fill_px(&self) -> i32 {
		self.pending_fill_px
	}

	pub fn style(&self) -> &BarStyle {
		&self.style
	}

	/// Draw entry point: the full track first, then one filled rectangle
	/// per completed half-step on top of it.
	pub fn draw(&self, width: i32, height: i32, backend: &mut dyn DrawBackend) {
		render::draw_track(&self.style, width, height, backend);
		render::draw_fill(&self.style, self.completed_half_steps, width, height, backend);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::RecordingBackend;
	use std::cell::RefCell;
	use std::rc::Rc;

	type Log = Rc<RefCell<Vec<String>>>;

	struct LoggingScheduler(Log);

	impl RedrawScheduler for LoggingScheduler {
		fn queue_draw(&self) {
			self.0.borrow_mut().push("draw".to_owned());
		}
	}

	fn bar_with_log(segment_count: u32) -> (SegmentedProgressBar, Log) {
		let log: Log = Rc::default();
		let style = BarStyle::new(
			segment_count,
			Color::LIGHT_GRAY,
			Color::BLUE,
			2,
			4,
		)
		.unwrap();
		let mut bar = SegmentedProgressBar::new(style, Box::new(LoggingScheduler(log.clone())));
		bar.connect_completed({
			let log = log.clone();
			move |half_steps| log.borrow_mut().push(format!("notify {}", half_steps))
		});
		(bar, log)
	}

	#[test]
	fn increment_counts_up_and_saturates() {
		let (mut bar, _log) = bar_with_log(3);
		for expected in 1..=6 {
			bar.increment();
			assert_eq!(bar.completed_half_steps(), expected);
		}
		bar.increment();
		bar.increment();
		assert_eq!(bar.completed_half_steps(), 6);
	}

	#[test]
	fn saturated_increment_is_silent() {
		let (mut bar, log) = bar_with_log(1);
		bar.increment();
		bar.increment();
		log.borrow_mut().clear();
		bar.increment();
		assert!(log.borrow().is_empty());
	}

	#[test]
	fn set_completed_accepts_the_valid_range() {
		let (mut bar, _log) = bar_with_log(3);
		for value in [0, 6, 3] {
			bar.set_completed(value);
			assert_eq!(bar.completed_half_steps(), value as u32);
		}
	}

	#[test]
	fn set_completed_rejects_out_of_range_values() {
		let (mut bar, log) = bar_with_log(3);
		bar.set_completed(4);
		log.borrow_mut().clear();
		bar.set_completed(-1);
		bar.set_completed(7);
		assert_eq!(bar.completed_half_steps(), 4);
		assert!(log.borrow().is_empty());
	}

	#[test]
	fn redraw_is_queued_before_the_listener_runs() {
		let (mut bar, log) = bar_with_log(3);
		bar.increment();
		assert_eq!(*log.borrow(), vec!["draw".to_owned(), "notify 1".to_owned()]);
	}

	#[test]
	fn every_successful_mutation_notifies_once() {
		let (mut bar, log) = bar_with_log(3);
		bar.increment();
		bar.set_completed(5);
		bar.set_completed(5);
		let notifications: Vec<String> = log
			.borrow()
			.iter()
			.filter(|entry| entry.starts_with("notify"))
			.cloned()
			.collect();
		assert_eq!(notifications, vec!["notify 1", "notify 5", "notify 5"]);
	}

	#[test]
	fn replacing_the_listener_drops_the_old_one() {
		let (mut bar, log) = bar_with_log(3);
		let replaced: Log = Rc::default();
		bar.connect_completed({
			let replaced = replaced.clone();
			move |half_steps| replaced.borrow_mut().push(format!("second {}", half_steps))
		});
		bar.increment();
		assert_eq!(*replaced.borrow(), vec!["second 1".to_owned()]);
		assert!(!log.borrow().iter().any(|entry| entry.starts_with("notify")));
	}

	#[test]
	fn shrinking_the_segment_count_keeps_stale_progress() {
		let (mut bar, log) = bar_with_log(5);
		bar.set_completed(10);
		bar.set_segment_count(2);
		assert_eq!(bar.completed_half_steps(), 10);

		// Out of range for the new count: increments stay no-ops until
		// set_completed brings the value back in range.
		log.borrow_mut().clear();
		bar.increment();
		assert_eq!(bar.completed_half_steps(), 10);
		assert!(log.borrow().is_empty());
		bar.set_completed(4);
		assert_eq!(bar.completed_half_steps(), 4);
	}

	#[test]
	fn draw_paints_track_then_fill() {
		let (mut bar, _log) = bar_with_log(3);
		bar.set_completed(4);
		let mut backend = RecordingBackend::new();
		bar.draw(90, 20, &mut backend);
		assert_eq!(backend.commands.len(), 3 + 4);
		assert!(backend.commands[..3]
			.iter()
			.all(|c| c.paint.color == Color::LIGHT_GRAY));
		assert!(backend.commands[3..]
			.iter()
			.all(|c| c.paint.color == Color::BLUE));
	}

	#[test]
	fn mutations_reset_the_pending_fill_offset() {
		let (mut bar, _log) = bar_with_log(3);
		bar.increment();
		assert_eq!(bar.pending_fill_px(), 0);
		bar.set_completed(2);
		assert_eq!(bar.pending_fill_px(), 0);
	}
}
