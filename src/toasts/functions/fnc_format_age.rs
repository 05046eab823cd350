use chrono::{DateTime, Local};

/// Formats a creation timestamp as a short relative age.
///
/// Collaborating components show this next to long-lived toasts and
/// status lines: "just now" under a minute, then whole minutes, then
/// whole hours, then the local date. A timestamp from the future (clock
/// adjustments) reads as "just now".
///
/// # Arguments
///
/// * `created_at` - When the item was created
/// * `now` - The reference instant, usually `Local::now()`
pub fn format_age(created_at: DateTime<Local>, now: DateTime<Local>) -> String {
	let elapsed = now.signed_duration_since(created_at);
	if elapsed.num_seconds() < 60 {
		return "just now".to_string();
	}
	if elapsed.num_minutes() < 60 {
		return format!("{}m ago", elapsed.num_minutes());
	}
	if elapsed.num_hours() < 24 {
		return format!("{}h ago", elapsed.num_hours());
	}
	created_at.format("%Y-%m-%d").to_string()
}

/// Convenience wrapper over [`format_age`] against the current time.
pub fn age_of(created_at: DateTime<Local>) -> String {
	format_age(created_at, Local::now())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Duration;

	fn base() -> DateTime<Local> {
		Local::now()
	}

	#[test]
	fn test_under_a_minute_is_just_now() {
		let now = base();
		assert_eq!(format_age(now - Duration::seconds(5), now), "just now");
	}

	#[test]
	fn test_minutes_and_hours() {
		let now = base();
		assert_eq!(format_age(now - Duration::minutes(3), now), "3m ago");
		assert_eq!(format_age(now - Duration::hours(2), now), "2h ago");
	}

	#[test]
	fn test_older_than_a_day_shows_the_date() {
		let now = base();
		let created = now - Duration::days(3);
		assert_eq!(format_age(created, now), created.format("%Y-%m-%d").to_string());
	}

	#[test]
	fn test_future_timestamp_reads_as_just_now() {
		let now = base();
		assert_eq!(format_age(now + Duration::minutes(10), now), "just now");
	}
}
