#[macro_use]
extern crate cascade;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::anyhow;
use clap::Parser;

use segbar::backend::AnsiBackend;
use segbar::bar::{RedrawScheduler, SegmentedProgressBar};
use segbar::config::user::read_user_config;
use segbar::style::BarStyle;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help(false))]
struct Args {
	/// Use a custom config file instead of looking for one.
	#[arg(long, value_name = "Config File Path")]
	config: Option<PathBuf>,

	/// Override the configured number of slots
	#[arg(long, short = 'n', value_name = "1 or more")]
	segments: Option<u32>,

	/// Drawable width in pixels (one terminal cell each)
	#[arg(long, default_value = "96", value_parser = clap::value_parser!(i32).range(1..=512))]
	width: i32,

	/// Drawable height in pixels
	#[arg(long, default_value = "7", value_parser = clap::value_parser!(i32).range(1..=64))]
	height: i32,
}

/// Redraw requests just mark the bar dirty; the command loop repaints
/// once per accepted command.
struct DirtyFlag(Rc<Cell<bool>>);

impl RedrawScheduler for DirtyFlag {
	fn queue_draw(&self) {
		self.0.set(true);
	}
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let mut bar_config = read_user_config(args.config.as_deref())
		.map_err(|error| anyhow!("Failed to parse config file: {}", error))?
		.bar;
	if let Some(count) = args.segments {
		bar_config.segment_count = Some(count);
	}
	let style = BarStyle::from_source(&bar_config)?;

	let dirty = Rc::new(Cell::new(true));
	let last_completed = Rc::new(Cell::new(0_u32));

	let mut bar = cascade! {
		SegmentedProgressBar::new(style, Box::new(DirtyFlag(dirty.clone())));
		..connect_completed({
			let last_completed = last_completed.clone();
			move |half_steps| last_completed.set(half_steps)
		});
	};

	let mut backend = AnsiBackend::new(args.width, args.height);

	println!("Commands: + (advance half-step), - (back one), set <n>, q (quit)");
	repaint(&bar, &mut backend, &dirty)?;

	for line in io::stdin().lock().lines() {
		let line = line?;
		match line.trim() {
			"q" | "quit" => break,
			"" => (),
			"+" => bar.increment(),
			"-" => bar.set_completed(last_completed.get() as i32 - 1),
			other => match other.strip_prefix("set ") {
				Some(value) => match value.trim().parse::<i32>() {
					Ok(value) => bar.set_completed(value),
					Err(_) => eprintln!("Not a half-step count: {:?}", value.trim()),
				},
				None => eprintln!("Unknown command: {:?}", other),
			},
		}
		repaint(&bar, &mut backend, &dirty)?;
	}

	Ok(())
}

fn repaint(
	bar: &SegmentedProgressBar,
	backend: &mut AnsiBackend,
	dirty: &Cell<bool>,
) -> io::Result<()> {
	if !dirty.replace(false) {
		return Ok(());
	}

	backend.clear();
	let (width, height) = (backend.width(), backend.height());
	bar.draw(width, height, backend);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	backend.render(&mut out)?;
	writeln!(out, "completed half-steps: {}", bar.completed_half_steps())?;
	out.flush()
}
