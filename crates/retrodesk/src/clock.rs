//! Clock strings for the menu bar and the `time` command.
//!
//! Command handlers take the clock as a trait object so tests can pin the
//! time instead of depending on the wall clock.

use chrono::Local;

/// Provider of formatted clock strings.
pub trait Clock: Send + Sync {
    /// Long form used by the terminal `time` command, e.g. `Sat 04:12 PM`.
    fn now_string(&self) -> String;

    /// Short form shown in the menu bar, e.g. `04:12 PM`.
    fn menu_string(&self) -> String;
}

/// System clock backed by the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_string(&self) -> String {
        Local::now().format("%a %I:%M %p").to_string()
    }

    fn menu_string(&self) -> String {
        Local::now().format("%I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_string_is_short_form() {
        let clock = SystemClock;
        // "HH:MM AM" / "HH:MM PM"
        let s = clock.menu_string();
        assert_eq!(s.len(), 8, "unexpected menu clock: {s}");
        assert!(s.ends_with("AM") || s.ends_with("PM"));
    }

    #[test]
    fn now_string_carries_weekday() {
        let clock = SystemClock;
        let s = clock.now_string();
        assert!(s.len() > 8, "unexpected time string: {s}");
    }
}
