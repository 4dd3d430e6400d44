//! Scroll-triggered number counter.
//!
//! The animation is a small state machine: it waits in [`Phase::Idle`] until
//! the counter becomes visible, then runs frame by frame on an exponential
//! ease-out curve and settles in [`Phase::Completed`] on exactly the target.
//! Frames come from a [`FrameClock`], so the browser's animation frames and
//! the fake clock in the tests drive it the same way.

use log::debug;

use crate::config;
use crate::error::ConfigError;

/// Something that can call back once on the next display refresh.
pub trait FrameClock {
    /// Ask for one `on_frame` call with the refresh timestamp.
    fn request_frame(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    target: u64,
    duration_ms: f64,
    suffix: String,
    group_thousands: bool,
}

impl CounterConfig {
    pub fn new(target: i64) -> Result<Self, ConfigError> {
        let target = u64::try_from(target).map_err(|_| ConfigError::NegativeTarget(target))?;
        Ok(Self {
            target,
            duration_ms: config::COUNTER_DURATION_MS as f64,
            suffix: String::new(),
            group_thousands: true,
        })
    }

    pub fn duration_ms(mut self, duration_ms: i64) -> Result<Self, ConfigError> {
        if duration_ms <= 0 {
            return Err(ConfigError::NonPositiveDuration(duration_ms));
        }
        self.duration_ms = duration_ms as f64;
        Ok(self)
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn group_thousands(mut self, enabled: bool) -> Self {
        self.group_thousands = enabled;
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// `started_at` is the timestamp of the first frame, unknown until that frame arrives.
    Running { started_at: Option<f64> },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The animation is not running; the frame changed nothing.
    Ignored,
    Continue,
    Done,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    config: CounterConfig,
    phase: Phase,
    current: u64,
}

impl CounterAnimation {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            current: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    /// Swaps in a new configuration if the run has not started yet; a run in
    /// progress or finished keeps the one it started with.
    pub fn reconfigure(&mut self, config: CounterConfig) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.config = config;
        true
    }

    /// Reports how much of the counter is on screen. Starts the run the first
    /// time the fraction reaches the visibility threshold and never again.
    pub fn on_visible(&mut self, fraction: f64, clock: &mut impl FrameClock) -> bool {
        if self.phase != Phase::Idle || !(fraction >= config::VISIBILITY_THRESHOLD) {
            return false;
        }
        debug!("Counter to {} became visible, starting", self.config.target);
        self.phase = Phase::Running { started_at: None };
        clock.request_frame();
        true
    }

    pub fn on_frame(&mut self, timestamp: f64, clock: &mut impl FrameClock) -> FrameOutcome {
        let started_at = match self.phase {
            Phase::Running { started_at: Some(t0) } => t0,
            Phase::Running { started_at: None } => {
                self.phase = Phase::Running { started_at: Some(timestamp) };
                timestamp
            }
            Phase::Idle | Phase::Completed => return FrameOutcome::Ignored,
        };

        let progress = ((timestamp - started_at) / self.config.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            // Land on the target itself, not a floored approximation of it.
            self.current = self.config.target;
            self.phase = Phase::Completed;
            debug!("Counter reached {}", self.config.target);
            return FrameOutcome::Done;
        }

        let value = (ease_out_expo(progress) * self.config.target as f64).floor() as u64;
        self.current = self.current.max(value.min(self.config.target));
        clock.request_frame();
        FrameOutcome::Continue
    }

    /// The text shown on the page: the formatted value followed by the suffix.
    pub fn display(&self) -> String {
        let number = if self.config.group_thousands {
            group_thousands(self.current)
        } else {
            self.current.to_string()
        };
        format!("{}{}", number, self.config.suffix)
    }
}

/// Exponential ease-out: fast at first, slowing towards the end.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Formats with `,` between groups of three digits, as en-US does.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Default)]
    struct FakeClock {
        pending: usize,
        requested: usize,
    }

    impl FrameClock for FakeClock {
        fn request_frame(&mut self) {
            self.pending += 1;
            self.requested += 1;
        }
    }

    impl FakeClock {
        fn take(&mut self) -> bool {
            if self.pending == 0 {
                return false;
            }
            self.pending -= 1;
            true
        }
    }

    /// Runs frames `step` ms apart until nothing asks for another; returns every value seen.
    fn run(animation: &mut CounterAnimation, clock: &mut FakeClock, start: f64, step: f64) -> Vec<u64> {
        let mut seen = Vec::new();
        let mut now = start;
        while clock.take() {
            animation.on_frame(now, clock);
            seen.push(animation.current());
            now += step;
        }
        seen
    }

    fn started(config: CounterConfig) -> (CounterAnimation, FakeClock) {
        let mut animation = CounterAnimation::new(config);
        let mut clock = FakeClock::default();
        assert!(animation.on_visible(1.0, &mut clock));
        (animation, clock)
    }

    #[test]
    fn converges_exactly_on_target() {
        for target in [0, 1, 7, 605, 2_000, 50_000, 150_000, 9_007_199_254_740_993] {
            let (mut animation, mut clock) = started(CounterConfig::new(target).unwrap());
            run(&mut animation, &mut clock, 12.0, FRAME_MS);
            assert_eq!(animation.current(), target as u64);
            assert_eq!(animation.phase(), Phase::Completed);
        }
    }

    #[test]
    fn never_counts_down_within_a_run() {
        for duration in [1, 7, 300, 2_500] {
            let config = CounterConfig::new(150_000).unwrap().duration_ms(duration).unwrap();
            let (mut animation, mut clock) = started(config);
            let seen = run(&mut animation, &mut clock, 1_000.0, FRAME_MS);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);
        }
    }

    #[test]
    fn first_frame_sets_the_start_time() {
        let (mut animation, mut clock) = started(CounterConfig::new(100).unwrap());
        assert!(clock.take());
        assert_eq!(animation.on_frame(5_000.0, &mut clock), FrameOutcome::Continue);
        assert_eq!(animation.current(), 0);
        assert_eq!(animation.phase(), Phase::Running { started_at: Some(5_000.0) });
    }

    #[test]
    fn follows_the_ease_out_curve() {
        let config = CounterConfig::new(1_000).unwrap().duration_ms(1_000).unwrap();
        let (mut animation, mut clock) = started(config);
        animation.on_frame(0.0, &mut clock);
        animation.on_frame(100.0, &mut clock);
        // 1 - 2^-1 at a tenth of the way through
        assert_eq!(animation.current(), 500);
        animation.on_frame(500.0, &mut clock);
        assert_eq!(animation.current(), 968);
    }

    #[test]
    fn waits_for_the_visibility_threshold() {
        let mut animation = CounterAnimation::new(CounterConfig::new(605).unwrap());
        let mut clock = FakeClock::default();

        assert!(!animation.on_visible(0.0, &mut clock));
        assert!(!animation.on_visible(0.09, &mut clock));
        assert!(!animation.on_visible(f64::NAN, &mut clock));
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(clock.requested, 0);

        assert!(animation.on_visible(0.1, &mut clock));
        assert!(animation.has_started());
        assert_eq!(clock.requested, 1);
    }

    #[test]
    fn starts_at_most_once() {
        let (mut animation, mut clock) = started(CounterConfig::new(605).unwrap());
        assert!(!animation.on_visible(1.0, &mut clock));
        run(&mut animation, &mut clock, 0.0, FRAME_MS);
        let requested = clock.requested;

        assert!(!animation.on_visible(0.5, &mut clock));
        assert_eq!(animation.on_frame(99_999.0, &mut clock), FrameOutcome::Ignored);
        assert_eq!(clock.requested, requested);
        assert_eq!(animation.current(), 605);
    }

    #[test]
    fn frames_before_start_are_ignored() {
        let mut animation = CounterAnimation::new(CounterConfig::new(10).unwrap());
        let mut clock = FakeClock::default();
        assert_eq!(animation.on_frame(16.0, &mut clock), FrameOutcome::Ignored);
        assert_eq!(animation.current(), 0);
        assert_eq!(clock.requested, 0);
    }

    #[test]
    fn stops_asking_for_frames_once_done() {
        let config = CounterConfig::new(50_000).unwrap().duration_ms(100).unwrap();
        let (mut animation, mut clock) = started(config);
        assert!(clock.take());
        animation.on_frame(0.0, &mut clock);
        assert!(clock.take());
        assert_eq!(animation.on_frame(250.0, &mut clock), FrameOutcome::Done);
        assert!(!clock.take());
    }

    #[test]
    fn renders_grouped_number_with_suffix() {
        let config = CounterConfig::new(150_000)
            .unwrap()
            .suffix("+")
            .duration_ms(2_500)
            .unwrap();
        let (mut animation, mut clock) = started(config);
        assert_eq!(animation.display(), "0+");
        run(&mut animation, &mut clock, 0.0, FRAME_MS);
        assert_eq!(animation.display(), "150,000+");
    }

    #[test]
    fn small_numbers_need_no_grouping() {
        let (mut animation, mut clock) = started(CounterConfig::new(605).unwrap());
        run(&mut animation, &mut clock, 0.0, FRAME_MS);
        assert_eq!(animation.display(), "605");
    }

    #[test]
    fn grouping_can_be_turned_off() {
        let config = CounterConfig::new(2_000).unwrap().suffix("萬+").group_thousands(false);
        let (mut animation, mut clock) = started(config);
        run(&mut animation, &mut clock, 0.0, FRAME_MS);
        assert_eq!(animation.display(), "2000萬+");
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(CounterConfig::new(-1), Err(ConfigError::NegativeTarget(-1))));
        let base = CounterConfig::new(10).unwrap();
        assert!(matches!(
            base.clone().duration_ms(0),
            Err(ConfigError::NonPositiveDuration(0))
        ));
        assert!(matches!(
            base.duration_ms(-20),
            Err(ConfigError::NonPositiveDuration(-20))
        ));
    }

    #[test]
    fn new_settings_apply_only_before_the_run() {
        let mut animation = CounterAnimation::new(CounterConfig::new(605).unwrap());
        assert!(animation.reconfigure(CounterConfig::new(2_000).unwrap().suffix("+")));

        let mut clock = FakeClock::default();
        animation.on_visible(1.0, &mut clock);
        assert!(!animation.reconfigure(CounterConfig::new(1).unwrap()));
        run(&mut animation, &mut clock, 0.0, FRAME_MS);
        assert_eq!(animation.display(), "2,000+");
    }

    #[test]
    fn ease_out_hits_both_ends() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.5);
    }

    #[test]
    fn groups_thousands_like_en_us() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
