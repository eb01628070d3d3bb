//! Skill bar fill animation

use std::time::{Duration, Instant};

/// Bars grow from empty to their level when the Skills section opens
#[derive(Debug, Clone, Copy)]
pub struct SkillReveal {
    start_time: Instant,
}

impl SkillReveal {
    /// Duration of the fill animation
    const DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(start_time: Instant) -> Self {
        Self { start_time }
    }

    /// Eased fill fraction in `0.0..=1.0`
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        let linear = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        // Cubic ease-out: fast start, gentle landing
        simple_easing::cubic_out(linear)
    }

    pub fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= Self::DURATION
    }
}

impl Default for SkillReveal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let now = Instant::now();
        let reveal = SkillReveal::starting_at(now);
        assert_eq!(reveal.progress_at(now), 0.0);
        assert!(!reveal.is_complete_at(now));
    }

    #[test]
    fn test_ends_full() {
        let now = Instant::now();
        let reveal = SkillReveal::starting_at(now);
        let later = now + Duration::from_secs(5);
        assert_eq!(reveal.progress_at(later), 1.0);
        assert!(reveal.is_complete_at(later));
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear_midway() {
        let now = Instant::now();
        let reveal = SkillReveal::starting_at(now);
        let halfway = now + SkillReveal::DURATION / 2;
        assert!(reveal.progress_at(halfway) > 0.5);
        assert!(reveal.progress_at(halfway) < 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let now = Instant::now();
        let reveal = SkillReveal::starting_at(now);
        let mut last = 0.0;
        for step in 0..=14 {
            let p = reveal.progress_at(now + Duration::from_millis(step * 50));
            assert!(p >= last);
            last = p;
        }
    }
}
