//! Animated scalar values.
//!
//! ## Usage
//!
//! Drive a widget property from a value that can jump immediately or move
//! towards a target with a timing curve or a spring. The host calls
//! [`AnimatedValue::tick`] once per frame while [`AnimatedValue::is_animating`]
//! is true.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use notch_ui::animation::{AnimatedValue, AnimationConfig, TimingConfig};
//!
//! let value = AnimatedValue::new(0.0);
//! let start = Instant::now();
//! value.animate_to_at(8.0, &AnimationConfig::Timing(TimingConfig::default()), start);
//! assert!(value.tick(start + Duration::from_millis(75)));
//! assert!(!value.tick(start + Duration::from_millis(150)));
//! assert_eq!(value.get(), 8.0);
//! ```

pub mod easing;
mod interpolation;
mod spring;
mod timing;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use derive_setters::Setters;
use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::prop::CallbackWith;

pub use easing::{CubicBezier, Easing};
pub use interpolation::{AnimatedColor, AnimatedInterpolation, Extrapolate, Interpolation};
pub use spring::SpringConfig;
pub use timing::{DEFAULT_TIMING_DURATION, TimingConfig};

use spring::SpringMotion;
use timing::TimingMotion;

new_key_type! {
    /// Handle returned by [`AnimatedValue::add_listener`].
    pub struct ListenerId;
}

/// Which kind of transition a widget uses for externally driven changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// Damped spring.
    Spring,
    /// Eased curve over a fixed duration.
    #[default]
    Timing,
}

/// A fully specified transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationConfig {
    /// See [`TimingConfig`].
    Timing(TimingConfig),
    /// See [`SpringConfig`].
    Spring(SpringConfig),
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::Timing(TimingConfig::default())
    }
}

impl From<TimingConfig> for AnimationConfig {
    fn from(config: TimingConfig) -> Self {
        Self::Timing(config)
    }
}

impl From<SpringConfig> for AnimationConfig {
    fn from(config: SpringConfig) -> Self {
        Self::Spring(config)
    }
}

/// Partial animation settings layered over the defaults of an
/// [`AnimationType`].
///
/// Fields that do not apply to the selected type are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[setters(strip_option)]
pub struct AnimationOverrides {
    /// Timing duration.
    pub duration: Option<Duration>,
    /// Timing delay.
    pub delay: Option<Duration>,
    /// Timing curve.
    pub easing: Option<Easing>,
    /// Spring friction.
    pub friction: Option<f64>,
    /// Spring tension.
    pub tension: Option<f64>,
    /// Spring initial velocity.
    pub velocity: Option<f64>,
    /// Spring rest displacement threshold.
    pub rest_displacement_threshold: Option<f64>,
    /// Spring rest speed threshold.
    pub rest_speed_threshold: Option<f64>,
    /// Spring overshoot clamping.
    pub overshoot_clamping: Option<bool>,
}

impl AnimationOverrides {
    /// Merges the overrides over the defaults of `kind`.
    pub fn resolve(&self, kind: AnimationType) -> AnimationConfig {
        match kind {
            AnimationType::Timing => {
                let base = TimingConfig::default();
                AnimationConfig::Timing(TimingConfig {
                    duration: self.duration.unwrap_or(base.duration),
                    delay: self.delay.unwrap_or(base.delay),
                    easing: self.easing.unwrap_or(base.easing),
                })
            }
            AnimationType::Spring => {
                let base = SpringConfig::default();
                AnimationConfig::Spring(SpringConfig {
                    friction: self.friction.unwrap_or(base.friction),
                    tension: self.tension.unwrap_or(base.tension),
                    velocity: self.velocity.unwrap_or(base.velocity),
                    rest_displacement_threshold: self
                        .rest_displacement_threshold
                        .unwrap_or(base.rest_displacement_threshold),
                    rest_speed_threshold: self
                        .rest_speed_threshold
                        .unwrap_or(base.rest_speed_threshold),
                    overshoot_clamping: self
                        .overshoot_clamping
                        .unwrap_or(base.overshoot_clamping),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Timing(TimingMotion),
    Spring(SpringMotion),
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    motion: Motion,
    started_at: Instant,
}

impl Transition {
    /// Returns `(position, velocity, finished)` at `now`.
    fn sample(&self, now: Instant) -> (f64, f64, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        match &self.motion {
            Motion::Timing(motion) => {
                let (position, finished) = motion.sample(elapsed);
                let velocity = if finished {
                    0.0
                } else {
                    motion.velocity(elapsed)
                };
                (position, velocity, finished)
            }
            Motion::Spring(motion) => {
                let sample = motion.sample(elapsed);
                (sample.position, sample.velocity, sample.at_rest)
            }
        }
    }
}

struct AnimatedInner {
    value: f64,
    transition: Option<Transition>,
    listeners: SlotMap<ListenerId, CallbackWith<f64>>,
}

type ListenerSnapshot = SmallVec<[CallbackWith<f64>; 4]>;

impl AnimatedInner {
    fn listeners(&self) -> ListenerSnapshot {
        self.listeners.values().cloned().collect()
    }
}

/// A shared, animatable `f64`.
///
/// Cloning yields another handle to the same value. Listeners run after the
/// internal lock is released, so they may read or write the value.
#[derive(Clone)]
pub struct AnimatedValue {
    inner: Arc<RwLock<AnimatedInner>>,
}

impl std::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("AnimatedValue")
            .field("value", &inner.value)
            .field("animating", &inner.transition.is_some())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AnimatedValue {
    /// Creates a value at rest.
    pub fn new(value: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AnimatedInner {
                value,
                transition: None,
                listeners: SlotMap::with_key(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.inner.read().value
    }

    /// Whether a transition is running.
    pub fn is_animating(&self) -> bool {
        self.inner.read().transition.is_some()
    }

    /// Jumps to `value`, cancelling any running transition.
    pub fn set(&self, value: f64) {
        let notify = {
            let mut inner = self.inner.write();
            inner.transition = None;
            let changed = inner.value != value;
            inner.value = value;
            changed.then(|| inner.listeners())
        };
        if let Some(listeners) = notify {
            for listener in listeners {
                listener.call(value);
            }
        }
    }

    /// Stops any running transition where it currently is and returns the
    /// value.
    pub fn stop_animation(&self) -> f64 {
        let mut inner = self.inner.write();
        inner.transition = None;
        inner.value
    }

    /// Starts a transition to `target` using the current time.
    pub fn animate_to(&self, target: f64, config: &AnimationConfig) {
        self.animate_to_at(target, config, Instant::now());
    }

    /// Starts a transition to `target` that begins at `now`.
    ///
    /// Replaces any running transition. A spring that replaces a running
    /// transition, spring or timing curve, starts with its current velocity.
    pub fn animate_to_at(&self, target: f64, config: &AnimationConfig, now: Instant) {
        let mut inner = self.inner.write();
        let from = inner.value;
        let motion = match config {
            AnimationConfig::Timing(timing) => {
                Motion::Timing(TimingMotion::new(from, target, *timing))
            }
            AnimationConfig::Spring(spring) => {
                let velocity = match inner.transition {
                    Some(running) => running.sample(now).1,
                    None => spring.velocity,
                };
                Motion::Spring(SpringMotion::new(from, target, velocity, *spring))
            }
        };
        tracing::debug!(from, target, ?config, "starting value transition");
        inner.transition = Some(Transition {
            motion,
            started_at: now,
        });
    }

    /// Advances the running transition to `now`.
    ///
    /// Returns whether a transition is still running afterwards.
    pub fn tick(&self, now: Instant) -> bool {
        let (value, running, listeners) = {
            let mut inner = self.inner.write();
            let Some(transition) = inner.transition else {
                return false;
            };
            let (position, _, finished) = transition.sample(now);
            if finished {
                inner.transition = None;
            }
            let changed = inner.value != position;
            inner.value = position;
            tracing::trace!(value = position, finished, "value transition tick");
            (position, !finished, changed.then(|| inner.listeners()))
        };
        if let Some(listeners) = listeners {
            for listener in listeners {
                listener.call(value);
            }
        }
        running
    }

    /// Registers a listener called with every new value.
    pub fn add_listener(&self, listener: impl Into<CallbackWith<f64>>) -> ListenerId {
        self.inner.write().listeners.insert(listener.into())
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.write().listeners.remove(id).is_some()
    }

    /// Derives a value mapped through `interpolation`.
    pub fn interpolate(&self, interpolation: Interpolation) -> AnimatedInterpolation {
        AnimatedInterpolation::new(self.clone(), interpolation)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_set_is_immediate_and_notifies() {
        let value = AnimatedValue::new(0.0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        value.add_listener(move |v: f64| sink.lock().push(v));

        value.set(8.0);
        value.set(8.0);
        assert_eq!(value.get(), 8.0);
        assert_eq!(*seen.lock(), vec![8.0]);
    }

    #[test]
    fn test_timing_transition_reaches_target() {
        let value = AnimatedValue::new(0.0);
        let start = Instant::now();
        value.animate_to_at(8.0, &TimingConfig::default().into(), start);
        assert!(value.is_animating());
        assert_eq!(value.get(), 0.0);

        assert!(value.tick(start + ms(75)));
        let mid = value.get();
        assert!(mid > 0.0 && mid < 8.0, "mid = {mid}");

        assert!(!value.tick(start + ms(150)));
        assert_eq!(value.get(), 8.0);
        assert!(!value.is_animating());
        assert!(!value.tick(start + ms(200)));
    }

    #[test]
    fn test_set_cancels_transition() {
        let value = AnimatedValue::new(0.0);
        let start = Instant::now();
        value.animate_to_at(8.0, &AnimationConfig::default(), start);
        value.set(3.0);
        assert!(!value.is_animating());
        assert!(!value.tick(start + ms(150)));
        assert_eq!(value.get(), 3.0);
    }

    #[test]
    fn test_last_transition_wins() {
        let value = AnimatedValue::new(0.0);
        let start = Instant::now();
        value.animate_to_at(8.0, &AnimationConfig::default(), start);
        value.tick(start + ms(50));
        value.animate_to_at(2.0, &AnimationConfig::default(), start + ms(50));
        value.tick(start + ms(300));
        assert_eq!(value.get(), 2.0);
    }

    #[test]
    fn test_spring_settles_and_keeps_velocity() {
        let value = AnimatedValue::new(0.0);
        let start = Instant::now();
        let spring = AnimationConfig::Spring(SpringConfig::default());
        value.animate_to_at(10.0, &spring, start);
        value.tick(start + ms(50));
        let before = value.get();

        // Retarget to the current position: a carried velocity keeps it moving.
        value.animate_to_at(before, &spring, start + ms(50));
        value.tick(start + ms(60));
        assert!(value.get() > before);

        let mut now = start + ms(60);
        while value.tick(now) {
            now += ms(16);
            assert!(now < start + Duration::from_secs(10));
        }
        assert_eq!(value.get(), before);
    }

    #[test]
    fn test_spring_inherits_timing_velocity() {
        let value = AnimatedValue::new(0.0);
        let start = Instant::now();
        value.animate_to_at(10.0, &TimingConfig::default().into(), start);
        value.tick(start + ms(75));
        let before = value.get();

        let spring = AnimationConfig::Spring(SpringConfig::default());
        value.animate_to_at(before, &spring, start + ms(75));
        value.tick(start + ms(85));
        assert!(value.get() > before, "{} <= {before}", value.get());

        let resting = AnimatedValue::new(before);
        resting.animate_to_at(before, &spring, start);
        assert!(!resting.tick(start + ms(10)));
        assert_eq!(resting.get(), before);
    }

    #[test]
    fn test_listeners_can_be_removed_and_reenter() {
        let value = AnimatedValue::new(0.0);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let reader = value.clone();
        let id = value.add_listener(move |v: f64| {
            assert_eq!(reader.get(), v);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        value.set(1.0);
        assert!(value.remove_listener(id));
        assert!(!value.remove_listener(id));
        value.set(2.0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_overrides_resolve_over_defaults() {
        let overrides = AnimationOverrides::default()
            .duration(ms(400))
            .friction(12.0);
        assert_eq!(
            overrides.resolve(AnimationType::Timing),
            AnimationConfig::Timing(TimingConfig {
                duration: ms(400),
                ..TimingConfig::default()
            })
        );
        assert_eq!(
            overrides.resolve(AnimationType::Spring),
            AnimationConfig::Spring(SpringConfig {
                friction: 12.0,
                ..SpringConfig::default()
            })
        );
        assert_eq!(
            AnimationOverrides::default().resolve(AnimationType::default()),
            AnimationConfig::default()
        );
    }
}
