// Count-up animation for the numeric counters in the stats section.

/// Reads an integer the way HTML authors expect from a `data-target`
/// attribute: surrounding whitespace, an optional sign and the leading
/// digits. Trailing junk is ignored (`"25+"` is 25).
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Interpolates from 0 to `target` over `STEPS` ticks, `STEP_DELAY_MS` apart.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    step: u32,
}

impl CounterAnimation {
    pub const STEPS: u32 = 100;
    pub const STEP_DELAY_MS: i32 = 20;

    pub fn new(target: i64) -> Self {
        CounterAnimation { target, step: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.step >= CounterAnimation::STEPS
    }

    /// Value to display after the next step, or `None` once finished.
    /// The last step lands exactly on the target.
    pub fn tick(&mut self) -> Option<i64> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        if self.is_finished() {
            return Some(self.target);
        }
        let fraction = self.step as f64 / CounterAnimation::STEPS as f64;
        Some((self.target as f64 * fraction).floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integers() {
        assert_eq!(parse_target("150"), Some(150));
        assert_eq!(parse_target(" 42 "), Some(42));
        assert_eq!(parse_target("25+"), Some(25));
        assert_eq!(parse_target("-7"), Some(-7));
        assert_eq!(parse_target("3.9"), Some(3));
    }

    #[test]
    fn rejects_non_numeric_targets() {
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target("-"), None);
        assert_eq!(parse_target("+x1"), None);
    }

    #[test]
    fn counts_up_in_a_hundred_steps_and_snaps_to_target() {
        let mut anim = CounterAnimation::new(57);
        let mut shown = Vec::new();
        while let Some(value) = anim.tick() {
            shown.push(value);
        }
        assert_eq!(shown.len(), 100);
        assert_eq!(shown[0], 0);
        assert_eq!(*shown.last().unwrap(), 57);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn finished_animation_never_changes_again() {
        let mut anim = CounterAnimation::new(10);
        while anim.tick().is_some() {}
        assert!(anim.is_finished());
        assert_eq!(anim.tick(), None);
    }
}
