use crate::paint::Paint;
use crate::path::PathOp;

mod ansi;

pub use ansi::AnsiBackend;

/// Rendering side of the bar: receives closed outlines and fills them.
/// Implementations decide what a pixel is.
pub trait DrawBackend {
	fn fill_path(&mut self, ops: &[PathOp], paint: &Paint);
}

/// One recorded `fill_path` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
	pub ops: Vec<PathOp>,
	pub paint: Paint,
}

/// Backend that keeps every command instead of painting. Embedders can
/// drive the bar headlessly with it; the test suite asserts against it.
#[derive(Debug, Default)]
pub struct RecordingBackend {
	pub commands: Vec<DrawCommand>,
}

impl RecordingBackend {
	pub fn new() -> Self {
		Self::default()
	}
}

impl DrawBackend for RecordingBackend {
	fn fill_path(&mut self, ops: &[PathOp], paint: &Paint) {
		self.commands.push(DrawCommand {
			ops: ops.to_vec(),
			paint: *paint,
		});
	}
}
