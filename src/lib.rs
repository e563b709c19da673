//! Segmented progress bar: a fixed number of equal-width slots that fill in
//! half-slot steps, rendered through a pluggable draw backend.

pub mod backend;
pub mod bar;
pub mod config;
pub mod paint;
pub mod path;
pub mod render;
pub mod style;

pub use backend::{AnsiBackend, DrawBackend, DrawCommand, RecordingBackend};
pub use bar::{RedrawScheduler, SegmentedProgressBar};
pub use paint::{Color, Paint};
pub use style::{BarStyle, StyleError, StyleSource};
