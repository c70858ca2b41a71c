use std::fmt;

use crate::animation::Animation;
use crate::animation::orientation::Orientation;
use crate::curve::wrap::{IndexWrapMode, TimeWrapMode};
use crate::foundation::error::{KeysplineError, KeysplineResult};

/// What a listener is told about: the animation involved and how far into it playback was.
#[derive(Clone, Copy, Debug)]
pub struct AnimationEvent<'a> {
    pub animation: &'a dyn Animation,
    /// Seconds since the animation started, pauses excluded.
    pub elapsed: f64,
}

/// Playback notifications. Every hook defaults to doing nothing.
pub trait AnimationListener: Send {
    fn started(&mut self, _event: &AnimationEvent<'_>) {}

    /// A looping animation crossed into its next pass.
    fn looped(&mut self, _event: &AnimationEvent<'_>) {}

    fn paused(&mut self, _event: &AnimationEvent<'_>) {}

    fn unpaused(&mut self, _event: &AnimationEvent<'_>) {}

    /// Stopped explicitly through [`Player::stop`].
    fn stopped(&mut self, _event: &AnimationEvent<'_>) {}

    /// Replaced by another animation before it finished.
    fn interrupted(&mut self, _event: &AnimationEvent<'_>) {}

    /// Ran out of passes.
    fn ended(&mut self, _event: &AnimationEvent<'_>) {}
}

/// Forwards every notification to each registered listener, in registration order.
#[derive(Default)]
pub struct DispatchListener {
    listeners: Vec<Box<dyn AnimationListener>>,
}

impl DispatchListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl AnimationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for DispatchListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchListener")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AnimationListener for DispatchListener {
    fn started(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.started(event));
    }

    fn looped(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.looped(event));
    }

    fn paused(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.paused(event));
    }

    fn unpaused(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.unpaused(event));
    }

    fn stopped(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.stopped(event));
    }

    fn interrupted(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.interrupted(event));
    }

    fn ended(&mut self, event: &AnimationEvent<'_>) {
        self.listeners.iter_mut().for_each(|l| l.ended(event));
    }
}

/// How many passes a looping animation runs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCount {
    /// Exactly this many passes; `Times(0)` ends on the first tick.
    Times(u32),
    Forever,
}

#[derive(Debug)]
struct Playing {
    animation: Box<dyn Animation>,
    elapsed: f64,
    loops: LoopCount,
}

impl Playing {
    fn event(&self) -> AnimationEvent<'_> {
        AnimationEvent {
            animation: self.animation.as_ref(),
            elapsed: self.elapsed,
        }
    }
}

/// Drives at most one animation from a tick loop and reports transitions to listeners.
///
/// Time only advances through [`Player::tick`]; a paused player ignores ticks, which is
/// equivalent to shifting the start time forward by the paused interval.
#[derive(Debug, Default)]
pub struct Player {
    playing: Option<Playing>,
    paused: bool,
    listeners: DispatchListener,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: impl AnimationListener + 'static) {
        self.listeners.add(listener);
    }

    pub fn listeners_mut(&mut self) -> &mut DispatchListener {
        &mut self.listeners
    }

    /// Play one pass, holding the last orientation at the end rather than wrapping.
    pub fn play(&mut self, animation: impl Animation + 'static) {
        let mut animation: Box<dyn Animation> = Box::new(animation);
        animation.set_time_wrap(TimeWrapMode::Clamp);
        self.start(animation, LoopCount::Times(1));
    }

    /// Play `loops` passes back to back, wrapping both time and keyframe indices.
    pub fn play_looped(&mut self, animation: impl Animation + 'static, loops: LoopCount) {
        let mut animation: Box<dyn Animation> = Box::new(animation);
        animation.set_time_wrap(TimeWrapMode::Wrap);
        animation.set_index_wrap(IndexWrapMode::Wrap);
        self.start(animation, loops);
    }

    fn start(&mut self, animation: Box<dyn Animation>, loops: LoopCount) {
        if let Some(previous) = self.playing.take() {
            tracing::debug!(elapsed = previous.elapsed, "animation interrupted");
            self.listeners.interrupted(&previous.event());
        }
        tracing::debug!(duration = animation.duration(), ?loops, "animation started");
        let playing = self.playing.insert(Playing {
            animation,
            elapsed: 0.0,
            loops,
        });
        self.paused = false;
        self.listeners.started(&playing.event());
    }

    /// Pause or resume. Listeners hear about changes only, and only while something plays.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        let Some(playing) = &self.playing else {
            return;
        };
        tracing::debug!(paused, elapsed = playing.elapsed, "animation pause toggled");
        if paused {
            self.listeners.paused(&playing.event());
        } else {
            self.listeners.unpaused(&playing.event());
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop the current animation, if any.
    pub fn stop(&mut self) {
        if let Some(playing) = self.playing.take() {
            tracing::debug!(elapsed = playing.elapsed, "animation stopped");
            self.listeners.stopped(&playing.event());
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    pub fn animation(&self) -> Option<&dyn Animation> {
        self.playing.as_ref().map(|p| p.animation.as_ref())
    }

    /// Seconds into the current animation.
    pub fn elapsed(&self) -> Option<f64> {
        self.playing.as_ref().map(|p| p.elapsed)
    }

    /// Advance by `dt` seconds and sample.
    ///
    /// Returns `None` when nothing is playing, while paused, and on the tick that ends
    /// the animation.
    pub fn tick(&mut self, dt: f64) -> KeysplineResult<Option<Orientation>> {
        if !dt.is_finite() {
            return Err(KeysplineError::validation(format!(
                "tick delta must be finite (got {dt})"
            )));
        }
        if self.paused {
            return Ok(None);
        }
        let Some(playing) = self.playing.as_mut() else {
            return Ok(None);
        };

        playing.elapsed += dt;
        let elapsed = playing.elapsed;
        let duration = playing.animation.duration();

        if let LoopCount::Times(n) = playing.loops
            && elapsed > f64::from(n) * duration
        {
            tracing::debug!(elapsed, passes = n, "animation ended");
            self.listeners.ended(&playing.event());
            self.playing = None;
            return Ok(None);
        }

        let last_pass = ((elapsed - dt).max(0.0) / duration).floor();
        let pass = (elapsed.max(0.0) / duration).floor();
        // Landing exactly on the end of the final pass is not a new pass.
        let has_next = match playing.loops {
            LoopCount::Times(n) => pass < f64::from(n),
            LoopCount::Forever => true,
        };
        if pass > last_pass && has_next {
            tracing::debug!(elapsed, pass, "animation looped");
            self.listeners.looped(&playing.event());
        }

        playing.animation.sample(elapsed).map(Some)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
