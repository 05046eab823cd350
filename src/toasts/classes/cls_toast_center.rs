use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use super::cls_toast::{build_lossy, Toast};
use super::{ToastCallback, ToastState};
use crate::shared_utils::math::ease_out;
use crate::toasts::functions::fnc_calculate_size::H_CHROME;
use crate::toasts::functions::{calculate_rect, calculate_size, level_icon, resolve_styles};
use crate::toasts::types::{Anchor, AutoDismiss, ConfirmChoice, Level, Phase};

/// Opaque reference to a toast, usable for later explicit dismissal.
///
/// Handles stay valid for the lifetime of the process; operations on a
/// handle whose toast is already gone are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastHandle(pub(crate) u64);

/// Center-level configuration and timing defaults.
#[derive(Debug, Clone)]
pub struct ToastConfig {
	/// Most toasts allowed in `Entering`/`Visible` at once; inserting
	/// beyond this evicts the oldest survivor. Treated as at least 1.
	pub max_visible: usize,

	/// Countdown applied by [`AutoDismiss::Auto`].
	pub default_duration: Duration,

	/// Fixed length of the entry transition.
	pub enter_duration: Duration,

	/// Fixed length of the exit transition; removal from tracking is
	/// deferred by this much after any dismissal.
	pub leave_duration: Duration,

	/// Corner the stack grows from.
	pub anchor: Anchor,

	/// Upper bound on card width, in cells.
	pub max_width: u16,

	/// Inset between the stack and the frame edges, in cells.
	pub margin: u16,

	/// Vertical gap between stacked cards, in cells.
	pub gap: u16,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			max_visible: 5,
			default_duration: Duration::from_millis(5000),
			enter_duration: Duration::from_millis(150),
			leave_duration: Duration::from_millis(300),
			anchor: Anchor::BottomRight,
			max_width: 44,
			margin: 1,
			gap: 1,
		}
	}
}

/// Optional fields accepted by [`ToastCenter::show_with`].
#[derive(Default)]
pub struct ShowOptions {
	pub auto_dismiss: AutoDismiss,

	/// Secondary line rendered dimmed under the message.
	pub description: Option<String>,

	/// Completion percentage in `0..=100`; larger values are clamped.
	pub progress: Option<u16>,

	/// Replace key: a live toast with the same tag is refreshed in place
	/// instead of a duplicate being stacked.
	pub tag: Option<String>,

	/// Fired (once) when the toast is activated, which also dismisses it.
	pub on_select: Option<ToastCallback>,
}

/// Optional fields accepted by [`ToastCenter::confirm_with`].
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
	pub description: Option<String>,

	/// Label of the accept control.
	pub confirm_label: String,

	/// Label of the cancel control.
	pub cancel_label: String,

	pub level: Level,
}

impl Default for ConfirmOptions {
	fn default() -> Self {
		Self {
			description: None,
			confirm_label: "OK".to_string(),
			cancel_label: "Cancel".to_string(),
			level: Level::Info,
		}
	}
}

/// Owns the visual stack of transient messages.
///
/// The center is single-threaded and cooperative: every operation runs
/// synchronously to completion, and only auto-dismissal and removal are
/// deferred, via [`tick`](Self::tick). The host loop calls `tick` with the
/// elapsed delta and [`render`](Self::render) each frame, and optionally
/// forwards key events to [`handle_key`](Self::handle_key).
pub struct ToastCenter {
	config: ToastConfig,
	/// Tracked toasts in creation order; `Removed` entries are dropped at
	/// the end of each tick.
	states: Vec<ToastState>,
	next_id: u64,
}

impl Default for ToastCenter {
	fn default() -> Self {
		Self::new()
	}
}

impl ToastCenter {
	pub fn new() -> Self {
		Self::with_config(ToastConfig::default())
	}

	pub fn with_config(config: ToastConfig) -> Self {
		Self {
			config,
			states: Vec::new(),
			next_id: 0,
		}
	}

	pub fn config(&self) -> &ToastConfig {
		&self.config
	}

	/// Shows a toast with the default auto-dismiss duration.
	///
	/// Returns `None` (and shows nothing) when the message sanitizes to
	/// nothing; reporting feedback must never itself become an error.
	pub fn show(&mut self, message: impl AsRef<str>, level: Level) -> Option<ToastHandle> {
		self.show_with(message, level, ShowOptions::default())
	}

	/// Shows a toast with explicit options.
	pub fn show_with(
		&mut self,
		message: impl AsRef<str>,
		level: Level,
		options: ShowOptions,
	) -> Option<ToastHandle> {
		let Some(toast) = build_lossy(
			message.as_ref(),
			level,
			options.auto_dismiss,
			options.description,
			options.progress,
			options.tag,
		) else {
			log::debug!("dropping toast with no displayable message");
			return None;
		};

		if let Some(handle) = self.replace_by_tag(&toast, options.on_select.is_some()) {
			if let Some(callback) = options.on_select {
				if let Some(state) = self.state_mut(handle) {
					state.on_select = Some(callback);
				}
			}
			return Some(handle);
		}

		Some(self.insert(toast, options.on_select, None, None))
	}

	/// Inserts a toast built through the strict [`Toast::builder`] API.
	pub fn push(&mut self, toast: Toast) -> ToastHandle {
		self.insert(toast, None, None, None)
	}

	/// Shows a persistent confirm-style toast with accept/cancel controls.
	///
	/// Exactly one of the callbacks fires, exactly once, when the toast is
	/// answered; answering also dismisses it. Dismissal through any other
	/// path (`hide`, `clear_all`, cap eviction) drops both callbacks
	/// unfired. There is no timeout.
	pub fn confirm(
		&mut self,
		message: impl AsRef<str>,
		on_confirm: ToastCallback,
		on_cancel: Option<ToastCallback>,
	) -> Option<ToastHandle> {
		self.confirm_with(message, on_confirm, on_cancel, ConfirmOptions::default())
	}

	/// Shows a confirm-style toast with explicit options.
	pub fn confirm_with(
		&mut self,
		message: impl AsRef<str>,
		on_confirm: ToastCallback,
		on_cancel: Option<ToastCallback>,
		options: ConfirmOptions,
	) -> Option<ToastHandle> {
		let Some(mut toast) = build_lossy(
			message.as_ref(),
			options.level,
			AutoDismiss::Never,
			options.description,
			None,
			None,
		) else {
			log::debug!("dropping confirm with no displayable message");
			return None;
		};
		toast.action_labels = Some((options.confirm_label, options.cancel_label));
		Some(self.insert(toast, None, Some(on_confirm), on_cancel))
	}

	/// Starts dismissing a toast. Idempotent: hiding an already-hidden or
	/// unknown handle is a no-op. Removal from tracking happens after the
	/// exit transition has played out in `tick`.
	pub fn hide(&mut self, handle: ToastHandle) {
		if let Some(state) = self.state_mut(handle) {
			state.start_leaving();
		}
	}

	/// Hides every tracked toast.
	pub fn clear_all(&mut self) {
		for state in &mut self.states {
			state.start_leaving();
		}
	}

	/// Answers a pending confirm-style toast.
	///
	/// No-op for unknown handles, plain toasts, and toasts already
	/// dismissed or answered.
	pub fn respond(&mut self, handle: ToastHandle, choice: ConfirmChoice) {
		let Some(state) = self.state_mut(handle) else {
			return;
		};
		if !state.phase.is_live() || !state.toast.is_confirm() {
			return;
		}
		let callback = match choice {
			ConfirmChoice::Confirmed => state.on_confirm.take(),
			ConfirmChoice::Cancelled => state.on_cancel.take(),
		};
		let id = state.id;
		state.start_leaving();
		if let Some(callback) = callback {
			log::debug!("toast {id} answered: {choice:?}");
			callback();
		}
	}

	/// Fires a toast's `on_select` callback (at most once) and dismisses
	/// it. No-op for confirm-style toasts; those are answered through
	/// [`respond`](Self::respond).
	pub fn activate(&mut self, handle: ToastHandle) {
		let Some(state) = self.state_mut(handle) else {
			return;
		};
		if !state.phase.is_live() || state.toast.is_confirm() {
			return;
		}
		let callback = state.on_select.take();
		state.start_leaving();
		if let Some(callback) = callback {
			callback();
		}
	}

	/// Routes a key event to the stack. Returns `true` when consumed.
	///
	/// `Enter` answers the newest pending confirm, or activates the
	/// newest selectable toast. `Esc` cancels the newest pending confirm,
	/// or dismisses the newest live toast.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.kind == KeyEventKind::Release {
			return false;
		}
		match key.code {
			KeyCode::Enter => {
				if let Some(handle) = self.newest_confirm() {
					self.respond(handle, ConfirmChoice::Confirmed);
					return true;
				}
				if let Some(handle) = self.newest_selectable() {
					self.activate(handle);
					return true;
				}
				false
			}
			KeyCode::Esc => {
				if let Some(handle) = self.newest_confirm() {
					self.respond(handle, ConfirmChoice::Cancelled);
					return true;
				}
				if let Some(handle) = self.newest_live() {
					self.hide(handle);
					return true;
				}
				false
			}
			_ => false,
		}
	}

	/// Advances all toast timers by `delta` and drops toasts whose exit
	/// transition has finished. Call once per frame from the host loop.
	pub fn tick(&mut self, delta: Duration) {
		let enter = self.config.enter_duration;
		let leave = self.config.leave_duration;
		for state in &mut self.states {
			state.advance(delta, enter, leave);
		}
		self.states.retain(|state| {
			if state.phase == Phase::Removed {
				log::trace!("toast {} removed", state.id);
				false
			} else {
				true
			}
		});
	}

	/// Draws the stack into `area`, anchored per the configuration.
	///
	/// Layout is derived from whatever area the host supplies, so there is
	/// no separate container to set up and rendering cannot fail. Cards
	/// that no longer fit are skipped.
	pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
		let mut offset = 0u16;
		for state in &self.states {
			if state.phase == Phase::Removed {
				continue;
			}
			let (width, height) = calculate_size(&state.toast, area, self.config.max_width);
			if width == 0 || height == 0 {
				continue;
			}
			let progress =
				state.phase_progress(self.config.enter_duration, self.config.leave_duration);
			let slide = match state.phase {
				Phase::Entering => 1.0 - ease_out(progress),
				Phase::Leaving => ease_out(progress),
				Phase::Visible | Phase::Removed => 0.0,
			};
			let rect = calculate_rect(
				self.config.anchor,
				area,
				width,
				height,
				offset,
				self.config.margin,
				slide,
			);
			offset = offset.saturating_add(height.saturating_add(self.config.gap));
			if rect.width == 0 || rect.height == 0 {
				continue;
			}
			frame.render_widget(Clear, rect);
			frame.render_widget(card(state, rect), rect);
		}
	}

	/// Number of tracked (not yet removed) toasts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Number of toasts currently counting against the visible cap.
	pub fn visible_count(&self) -> usize {
		self.states.iter().filter(|s| s.phase.is_live()).count()
	}

	/// Whether a handle still refers to a tracked toast.
	pub fn contains(&self, handle: ToastHandle) -> bool {
		self.states.iter().any(|s| s.id == handle.0)
	}

	pub fn phase_of(&self, handle: ToastHandle) -> Option<Phase> {
		self.states.iter().find(|s| s.id == handle.0).map(|s| s.phase)
	}

	/// The toast configuration behind a handle, if still tracked.
	pub fn toast(&self, handle: ToastHandle) -> Option<&Toast> {
		self.states.iter().find(|s| s.id == handle.0).map(|s| &s.toast)
	}

	/// Wall-clock creation time, for relative-age displays.
	pub fn created_at(&self, handle: ToastHandle) -> Option<DateTime<Local>> {
		self.states
			.iter()
			.find(|s| s.id == handle.0)
			.map(|s| s.created_at)
	}

	/// Handles of all tracked toasts in creation order.
	pub fn handles(&self) -> impl Iterator<Item = ToastHandle> + '_ {
		self.states.iter().map(|s| ToastHandle(s.id))
	}

	fn insert(
		&mut self,
		toast: Toast,
		on_select: Option<ToastCallback>,
		on_confirm: Option<ToastCallback>,
		on_cancel: Option<ToastCallback>,
	) -> ToastHandle {
		let id = self.next_id;
		self.next_id += 1;
		let mut state = ToastState::new(id, toast, self.config.default_duration);
		state.on_select = on_select;
		state.on_confirm = on_confirm;
		state.on_cancel = on_cancel;
		log::debug!("toast {id} shown ({:?})", state.toast.level());
		self.states.push(state);
		self.enforce_cap();
		ToastHandle(id)
	}

	/// Refreshes a live toast carrying the same tag, if any.
	fn replace_by_tag(&mut self, toast: &Toast, takes_callback: bool) -> Option<ToastHandle> {
		let tag = toast.tag()?;
		let default_duration = self.config.default_duration;
		let state = self
			.states
			.iter_mut()
			.find(|s| s.phase.is_live() && s.toast.tag() == Some(tag))?;
		state.toast = toast.clone();
		state.remaining = toast.auto_dismiss().resolve(default_duration);
		if !takes_callback {
			state.on_select = None;
		}
		log::debug!("toast {} refreshed via tag {tag:?}", state.id);
		Some(ToastHandle(state.id))
	}

	/// Evicts the oldest live toasts until the cap holds again. Strict
	/// FIFO over creation order; level and duration never matter.
	fn enforce_cap(&mut self) {
		let max = self.config.max_visible.max(1);
		while self.visible_count() > max {
			// states are kept in creation order, so the first live entry
			// is the longest-resident one
			if let Some(oldest) = self.states.iter_mut().find(|s| s.phase.is_live()) {
				log::debug!("toast {} evicted by visible cap", oldest.id);
				oldest.start_leaving();
			}
		}
	}

	fn state_mut(&mut self, handle: ToastHandle) -> Option<&mut ToastState> {
		self.states.iter_mut().find(|s| s.id == handle.0)
	}

	fn newest_confirm(&self) -> Option<ToastHandle> {
		self.states
			.iter()
			.rev()
			.find(|s| s.phase.is_live() && s.toast.is_confirm())
			.map(|s| ToastHandle(s.id))
	}

	fn newest_selectable(&self) -> Option<ToastHandle> {
		self.states
			.iter()
			.rev()
			.find(|s| s.phase.is_live() && s.on_select.is_some())
			.map(|s| ToastHandle(s.id))
	}

	fn newest_live(&self) -> Option<ToastHandle> {
		self.states
			.iter()
			.rev()
			.find(|s| s.phase.is_live())
			.map(|s| ToastHandle(s.id))
	}
}

/// Builds the card widget for one toast.
fn card(state: &ToastState, rect: Rect) -> Paragraph<'static> {
	let toast = &state.toast;
	let (border_style, title_style, text_style, description_style) = resolve_styles(toast.level());

	let title = Line::from(vec![
		Span::raw(" "),
		Span::styled(level_icon(toast.level()), title_style),
		Span::raw(" "),
	]);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(border_style)
		.title(title)
		.padding(Padding::horizontal(1));

	let inner_width = rect.width.saturating_sub(H_CHROME).max(1);
	let mut lines: Vec<Line<'static>> = Vec::new();
	for line in toast.message().lines() {
		lines.push(Line::styled(line.to_string(), text_style));
	}
	if let Some(description) = toast.description() {
		for line in description.lines() {
			lines.push(Line::styled(line.to_string(), description_style));
		}
	}
	if let Some(progress) = toast.progress() {
		lines.push(progress_line(progress, inner_width, border_style));
	}
	if let Some((confirm, cancel)) = toast.action_labels() {
		lines.push(Line::styled(
			format!("[Enter] {confirm}  [Esc] {cancel}"),
			title_style,
		));
	}

	Paragraph::new(Text::from(lines))
		.wrap(Wrap { trim: true })
		.block(block)
}

fn progress_line(progress: u16, inner_width: u16, accent: Style) -> Line<'static> {
	let pct = progress.min(100);
	let label = format!("{pct:>3}%");
	let bar_width = usize::from(inner_width.saturating_sub(label.len() as u16 + 1).max(4));
	let filled = bar_width * usize::from(pct) / 100;
	let mut bar = "█".repeat(filled);
	bar.push_str(&"░".repeat(bar_width - filled));
	Line::from(vec![
		Span::styled(bar, accent),
		Span::raw(" "),
		Span::raw(label),
	])
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	use crossterm::event::KeyModifiers;
	use pretty_assertions::assert_eq;
	use ratatui::backend::TestBackend;
	use ratatui::Terminal;

	use super::*;

	const LEAVE: Duration = Duration::from_millis(300);

	fn counter() -> (Arc<AtomicUsize>, ToastCallback) {
		let count = Arc::new(AtomicUsize::new(0));
		let clone = Arc::clone(&count);
		(count, Box::new(move || {
			clone.fetch_add(1, Ordering::SeqCst);
		}))
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::empty())
	}

	fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
		terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect()
	}

	#[test]
	fn test_show_tracks_and_settles_visible() {
		let mut center = ToastCenter::new();
		let handle = center.show("Order accepted", Level::Success).expect("shown");
		assert_eq!(center.phase_of(handle), Some(Phase::Entering));
		center.tick(Duration::from_millis(150));
		assert_eq!(center.phase_of(handle), Some(Phase::Visible));
		assert_eq!(center.len(), 1);
	}

	#[test]
	fn test_empty_message_is_a_silent_no_op() {
		let mut center = ToastCenter::new();
		assert!(center.show("", Level::Info).is_none());
		assert!(center.show("   \t ", Level::Info).is_none());
		assert!(center.show("\u{1b}[2J", Level::Info).is_none());
		assert!(center.is_empty());
	}

	#[test]
	fn test_default_duration_auto_dismisses() {
		let mut center = ToastCenter::new();
		let handle = center.show("Order accepted", Level::Success).expect("shown");
		center.tick(Duration::from_millis(5000));
		assert_eq!(center.phase_of(handle), Some(Phase::Leaving));
		center.tick(LEAVE);
		assert!(!center.contains(handle));
		assert!(center.is_empty());
	}

	#[test]
	fn test_persistent_toast_outlives_the_default_duration() {
		let mut center = ToastCenter::new();
		let options = ShowOptions {
			auto_dismiss: AutoDismiss::from_millis(0),
			..ShowOptions::default()
		};
		let handle = center.show_with("pinned", Level::Warning, options).expect("shown");
		for _ in 0..10 {
			center.tick(Duration::from_millis(2000));
		}
		assert_eq!(center.phase_of(handle), Some(Phase::Visible));
	}

	#[test]
	fn test_cap_keeps_only_the_most_recent() {
		let mut center = ToastCenter::new();
		let handles: Vec<ToastHandle> = (0..8)
			.map(|i| center.show(format!("toast {i}"), Level::Info).expect("shown"))
			.collect();

		assert_eq!(center.visible_count(), 5);
		for handle in &handles[..3] {
			assert_eq!(center.phase_of(*handle), Some(Phase::Leaving));
		}
		for handle in &handles[3..] {
			assert!(center.phase_of(*handle).expect("tracked").is_live());
		}
	}

	#[test]
	fn test_eviction_is_fifo_regardless_of_level_or_duration() {
		let mut center = ToastCenter::with_config(ToastConfig {
			max_visible: 2,
			..ToastConfig::default()
		});
		let options = ShowOptions {
			auto_dismiss: AutoDismiss::Never,
			..ShowOptions::default()
		};
		let persistent_error = center
			.show_with("critical", Level::Error, options)
			.expect("shown");
		let second = center.show("second", Level::Info).expect("shown");
		let third = center.show("third", Level::Info).expect("shown");

		// oldest goes first even though it was persistent and an error
		assert_eq!(center.phase_of(persistent_error), Some(Phase::Leaving));
		assert!(center.phase_of(second).expect("tracked").is_live());
		assert!(center.phase_of(third).expect("tracked").is_live());
	}

	#[test]
	fn test_hide_is_idempotent() {
		let mut center = ToastCenter::new();
		let handle = center.show("bye", Level::Info).expect("shown");
		center.hide(handle);
		assert_eq!(center.phase_of(handle), Some(Phase::Leaving));
		center.tick(Duration::from_millis(200));
		// a second hide must not restart the exit transition
		center.hide(handle);
		center.tick(Duration::from_millis(100));
		assert!(!center.contains(handle));
	}

	#[test]
	fn test_operations_on_unknown_handles_are_no_ops() {
		let mut center = ToastCenter::new();
		let stale = ToastHandle(999);
		center.hide(stale);
		center.respond(stale, ConfirmChoice::Confirmed);
		center.activate(stale);
		assert!(center.is_empty());
	}

	#[test]
	fn test_clear_all_empties_after_the_leave_delay() {
		let mut center = ToastCenter::new();
		for i in 0..3 {
			center.show(format!("toast {i}"), Level::Info);
		}
		center.clear_all();
		assert_eq!(center.visible_count(), 0);
		assert_eq!(center.len(), 3);
		center.tick(LEAVE);
		assert!(center.is_empty());
	}

	#[test]
	fn test_confirm_fires_exactly_one_callback_once() {
		let mut center = ToastCenter::new();
		let (confirmed, on_confirm) = counter();
		let (cancelled, on_cancel) = counter();
		let handle = center
			.confirm("Decline order?", on_confirm, Some(on_cancel))
			.expect("shown");

		center.respond(handle, ConfirmChoice::Confirmed);
		assert_eq!(confirmed.load(Ordering::SeqCst), 1);
		assert_eq!(cancelled.load(Ordering::SeqCst), 0);

		// answering again is a no-op; the toast is already leaving
		center.respond(handle, ConfirmChoice::Confirmed);
		center.respond(handle, ConfirmChoice::Cancelled);
		assert_eq!(confirmed.load(Ordering::SeqCst), 1);
		assert_eq!(cancelled.load(Ordering::SeqCst), 0);

		center.tick(LEAVE);
		assert!(!center.contains(handle));
	}

	#[test]
	fn test_confirm_without_timeout_waits_indefinitely() {
		let mut center = ToastCenter::new();
		let (_, on_confirm) = counter();
		let handle = center.confirm("Sure?", on_confirm, None).expect("shown");
		for _ in 0..20 {
			center.tick(Duration::from_millis(5000));
		}
		assert_eq!(center.phase_of(handle), Some(Phase::Visible));
	}

	#[test]
	fn test_cancelling_without_a_cancel_callback_still_dismisses() {
		let mut center = ToastCenter::new();
		let (confirmed, on_confirm) = counter();
		let handle = center.confirm("Sure?", on_confirm, None).expect("shown");
		center.respond(handle, ConfirmChoice::Cancelled);
		assert_eq!(confirmed.load(Ordering::SeqCst), 0);
		assert_eq!(center.phase_of(handle), Some(Phase::Leaving));
	}

	#[test]
	fn test_evicted_confirm_drops_callbacks_unfired() {
		let mut center = ToastCenter::with_config(ToastConfig {
			max_visible: 1,
			..ToastConfig::default()
		});
		let (confirmed, on_confirm) = counter();
		let (cancelled, on_cancel) = counter();
		let handle = center
			.confirm("Sure?", on_confirm, Some(on_cancel))
			.expect("shown");
		center.show("newer toast", Level::Info);

		assert_eq!(center.phase_of(handle), Some(Phase::Leaving));
		center.respond(handle, ConfirmChoice::Confirmed);
		assert_eq!(confirmed.load(Ordering::SeqCst), 0);
		assert_eq!(cancelled.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn test_activate_fires_on_select_once_and_dismisses() {
		let mut center = ToastCenter::new();
		let (selected, on_select) = counter();
		let options = ShowOptions {
			on_select: Some(on_select),
			..ShowOptions::default()
		};
		let handle = center.show_with("open order", Level::Info, options).expect("shown");
		center.activate(handle);
		center.activate(handle);
		assert_eq!(selected.load(Ordering::SeqCst), 1);
		assert_eq!(center.phase_of(handle), Some(Phase::Leaving));
	}

	#[test]
	fn test_tag_refreshes_in_place_instead_of_stacking() {
		let mut center = ToastCenter::new();
		let first = center
			.show_with(
				"Uploading 1 of 3",
				Level::Info,
				ShowOptions {
					tag: Some("upload".to_string()),
					progress: Some(33),
					..ShowOptions::default()
				},
			)
			.expect("shown");
		let second = center
			.show_with(
				"Uploading 2 of 3",
				Level::Info,
				ShowOptions {
					tag: Some("upload".to_string()),
					progress: Some(66),
					..ShowOptions::default()
				},
			)
			.expect("shown");

		assert_eq!(first, second);
		assert_eq!(center.len(), 1);
		let toast = center.toast(first).expect("tracked");
		assert_eq!(toast.message(), "Uploading 2 of 3");
		assert_eq!(toast.progress(), Some(66));
	}

	#[test]
	fn test_tag_refresh_restarts_the_countdown() {
		fn tagged() -> ShowOptions {
			ShowOptions {
				tag: Some("status".to_string()),
				..ShowOptions::default()
			}
		}

		let mut center = ToastCenter::new();
		let handle = center.show_with("first", Level::Info, tagged()).expect("shown");
		center.tick(Duration::from_millis(4500));
		center.show_with("second", Level::Info, tagged()).expect("shown");
		// 9 seconds total, but the refresh restarted the 5 second countdown
		center.tick(Duration::from_millis(4500));
		assert!(center.phase_of(handle).expect("tracked").is_live());
	}

	#[test]
	fn test_handles_iterate_in_creation_order() {
		let mut center = ToastCenter::new();
		let handles: Vec<ToastHandle> = (0..4)
			.map(|i| center.show(format!("toast {i}"), Level::Info).expect("shown"))
			.collect();
		let tracked: Vec<ToastHandle> = center.handles().collect();
		assert_eq!(tracked, handles);
	}

	#[test]
	fn test_enter_key_answers_the_newest_confirm() {
		let mut center = ToastCenter::new();
		let (first_confirmed, first_cb) = counter();
		let (second_confirmed, second_cb) = counter();
		center.confirm("first?", first_cb, None);
		center.confirm("second?", second_cb, None);

		assert!(center.handle_key(key(KeyCode::Enter)));
		assert_eq!(first_confirmed.load(Ordering::SeqCst), 0);
		assert_eq!(second_confirmed.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_esc_cancels_a_confirm_then_dismisses_toasts() {
		let mut center = ToastCenter::new();
		let (confirmed, on_confirm) = counter();
		let (cancelled, on_cancel) = counter();
		let plain = center.show("plain", Level::Info).expect("shown");
		center.confirm("Sure?", on_confirm, Some(on_cancel));

		assert!(center.handle_key(key(KeyCode::Esc)));
		assert_eq!(cancelled.load(Ordering::SeqCst), 1);
		assert_eq!(confirmed.load(Ordering::SeqCst), 0);

		assert!(center.handle_key(key(KeyCode::Esc)));
		assert_eq!(center.phase_of(plain), Some(Phase::Leaving));

		assert!(!center.handle_key(key(KeyCode::Esc)));
	}

	#[test]
	fn test_unrelated_keys_are_not_consumed() {
		let mut center = ToastCenter::new();
		center.show("hello", Level::Info);
		assert!(!center.handle_key(key(KeyCode::Char('x'))));
	}

	#[test]
	fn test_render_shows_the_message() {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		let mut center = ToastCenter::new();
		center.show("Order accepted", Level::Success);
		center.tick(Duration::from_millis(150));
		terminal
			.draw(|frame| center.render(frame, frame.area()))
			.expect("draw");
		assert!(buffer_text(&terminal).contains("Order accepted"));
	}

	#[test]
	fn test_render_never_emits_injected_escapes() {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		let mut center = ToastCenter::new();
		center.show("\u{1b}[31mpwned\u{1b}[0m response", Level::Error);
		center.tick(Duration::from_millis(150));
		terminal
			.draw(|frame| center.render(frame, frame.area()))
			.expect("draw");
		let text = buffer_text(&terminal);
		assert!(!text.contains('\u{1b}'));
		assert!(text.contains("pwned response"));
	}

	#[test]
	fn test_render_keeps_markup_as_literal_text() {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		let mut center = ToastCenter::new();
		let handle = center.show("<script>alert(1)</script>", Level::Info).expect("shown");
		center.tick(Duration::from_millis(150));
		terminal
			.draw(|frame| center.render(frame, frame.area()))
			.expect("draw");
		assert!(buffer_text(&terminal).contains("<script>alert(1)</script>"));
		assert_eq!(
			center.toast(handle).expect("tracked").message(),
			"<script>alert(1)</script>"
		);
	}

	#[test]
	fn test_render_into_a_tiny_area_does_not_panic() {
		let mut terminal = Terminal::new(TestBackend::new(3, 2)).expect("terminal");
		let mut center = ToastCenter::new();
		center.show("does not fit anywhere", Level::Info);
		center.confirm("Sure?", Box::new(|| {}), None);
		terminal
			.draw(|frame| center.render(frame, frame.area()))
			.expect("draw");
	}

	#[test]
	fn test_confirm_controls_are_rendered() {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		let mut center = ToastCenter::new();
		center.confirm_with(
			"Decline order?",
			Box::new(|| {}),
			None,
			ConfirmOptions {
				confirm_label: "Decline".to_string(),
				cancel_label: "Keep".to_string(),
				..ConfirmOptions::default()
			},
		);
		center.tick(Duration::from_millis(150));
		terminal
			.draw(|frame| center.render(frame, frame.area()))
			.expect("draw");
		let text = buffer_text(&terminal);
		assert!(text.contains("Decline order?"));
		assert!(text.contains("[Enter] Decline"));
		assert!(text.contains("[Esc] Keep"));
	}
}
