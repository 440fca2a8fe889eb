//! Intro animation state

use std::time::{Duration, Instant};

/// Animation phase for the intro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Wordmark fading in, headline held
    Display,
    /// Wordmark sliding upward off screen
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Intro animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the intro started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Fraction of the headline revealed, 0.0 to 1.0
    pub reveal: f32,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Time the wordmark is held on screen
    const DISPLAY_DURATION: Duration = Duration::from_millis(1500);
    /// Duration of the scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: SplashPhase::Display,
            reveal: 0.0,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on the real clock
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(Instant::now(), terminal_height);
    }

    /// Update animation state for a given instant
    pub fn update_at(&mut self, now: Instant, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            let progress = elapsed.as_secs_f32() / Self::DISPLAY_DURATION.as_secs_f32();
            self.reveal = simple_easing::sine_out(progress);
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            self.reveal = 1.0;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}
