//! Interactive showcase for the toast center.
//!
//! Runs a minimal host loop: draws a key legend, forwards key events to
//! the stack, and ticks the process-wide center each frame.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use ratatui_toasts::{global, AutoDismiss, Level, ShowOptions, ToastConfig};

// Confirm callbacks run while the center lock is held, so they only flip
// flags; the loop turns the flags into follow-up toasts.
static DECLINED: AtomicBool = AtomicBool::new(false);
static KEPT: AtomicBool = AtomicBool::new(false);

fn main() -> io::Result<()> {
	global::init(ToastConfig::default());
	let mut terminal = ratatui::init();
	let result = run(&mut terminal);
	ratatui::restore();
	result
}

fn run(terminal: &mut DefaultTerminal) -> io::Result<()> {
	let mut last_tick = Instant::now();
	let mut upload_pct: u16 = 0;
	loop {
		terminal.draw(draw)?;

		if event::poll(Duration::from_millis(16))? {
			if let Event::Key(key) = event::read()? {
				if key.kind == KeyEventKind::Press {
					let consumed = global::with_toasts(|toasts| toasts.handle_key(key));
					if !consumed && !handle_command(key.code, &mut upload_pct) {
						return Ok(());
					}
				}
			}
		}

		let delta = last_tick.elapsed();
		last_tick = Instant::now();
		global::with_toasts(|toasts| toasts.tick(delta));
		drain_confirm_flags();
	}
}

/// Returns `false` when the demo should exit.
fn handle_command(code: KeyCode, upload_pct: &mut u16) -> bool {
	match code {
		KeyCode::Char('q') => return false,
		KeyCode::Char('s') => {
			global::show("Order accepted", Level::Success);
		}
		KeyCode::Char('e') => {
			global::show_with(
				"Payment failed",
				Level::Error,
				ShowOptions {
					auto_dismiss: AutoDismiss::Never,
					description: Some("The gateway rejected the card".to_string()),
					..ShowOptions::default()
				},
			);
		}
		KeyCode::Char('w') => {
			global::show("Kitchen is backed up", Level::Warning);
		}
		KeyCode::Char('i') => {
			global::show_with(
				"Order #42 in progress",
				Level::Info,
				ShowOptions {
					description: Some("Estimated 10 minutes".to_string()),
					..ShowOptions::default()
				},
			);
		}
		KeyCode::Char('p') => {
			*upload_pct = (*upload_pct + 10).min(100);
			let done = *upload_pct >= 100;
			global::show_with(
				if done { "Upload complete" } else { "Uploading menu photos" },
				if done { Level::Success } else { Level::Info },
				ShowOptions {
					auto_dismiss: if done { AutoDismiss::Auto } else { AutoDismiss::Never },
					progress: Some(*upload_pct),
					tag: Some("upload".to_string()),
					..ShowOptions::default()
				},
			);
			if done {
				*upload_pct = 0;
			}
		}
		KeyCode::Char('c') => {
			global::confirm(
				"Decline order #42?",
				Box::new(|| DECLINED.store(true, Ordering::SeqCst)),
				Some(Box::new(|| KEPT.store(true, Ordering::SeqCst))),
			);
		}
		KeyCode::Char('x') => global::clear_all(),
		_ => {}
	}
	true
}

fn drain_confirm_flags() {
	if DECLINED.swap(false, Ordering::SeqCst) {
		global::show("Order declined", Level::Error);
	}
	if KEPT.swap(false, Ordering::SeqCst) {
		global::show("Order kept", Level::Success);
	}
}

fn draw(frame: &mut Frame) {
	let help = Paragraph::new(vec![
		Line::from("s  success toast"),
		Line::from("e  persistent error"),
		Line::from("w  warning toast"),
		Line::from("i  info with description"),
		Line::from("p  tagged upload progress"),
		Line::from("c  confirm (Enter/Esc to answer)"),
		Line::from("x  clear all"),
		Line::from("q  quit"),
	])
	.block(Block::default().borders(Borders::ALL).title(" ratatui-toasts "));
	frame.render_widget(help, help_area(frame.area()));

	global::with_toasts(|toasts| toasts.render(frame, frame.area()));
}

fn help_area(area: Rect) -> Rect {
	Rect {
		width: area.width.min(38),
		height: area.height.min(10),
		..area
	}
}
