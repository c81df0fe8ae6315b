/// Upper bound of the speed slider; slider values run 0..=SPEED_MAX.
pub const SPEED_MAX: u32 = 10;

/// Default slider position on startup.
pub const DEFAULT_SPEED: u32 = 7;

/// Playback state of the visualizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

/// RenderLoop owns the playback state machine and the frame-skip throttle.
///
/// The host frame loop calls `advance()` once per displayed frame; the
/// return value says whether the simulation is due for a step this frame.
/// Redraw happens every frame regardless, so speed changes only affect how
/// often the automaton advances, never the display refresh.
pub struct RenderLoop {
    playback: Playback,
    /// Frames to skip between simulation steps; 0 steps every frame.
    skip_threshold: u32,
    /// Frames elapsed since the last simulation step.
    tick_count: u32,
}

impl RenderLoop {
    pub fn new() -> Self {
        let mut render_loop = Self {
            playback: Playback::Paused,
            skip_threshold: 0,
            tick_count: 0,
        };
        render_loop.set_speed(DEFAULT_SPEED);
        render_loop
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Transition to Playing. Returns false if already playing, in which
    /// case nothing changes; there is never more than one active schedule.
    pub fn start(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.playback = Playback::Playing;
        log::info!("playback started");
        true
    }

    /// Transition to Paused. Idempotent like `start`; stopping takes effect
    /// immediately, so no further step is due after this returns.
    pub fn stop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.playback = Playback::Paused;
        log::info!("playback paused");
        true
    }

    /// Recompute the frame-skip threshold from a slider position.
    ///
    /// Higher slider value means fewer skipped frames: value SPEED_MAX or
    /// SPEED_MAX-1 steps every frame, value 0 steps every SPEED_MAX-1
    /// frames. Takes effect on the next frame evaluation.
    pub fn set_speed(&mut self, value: u32) {
        self.skip_threshold = (SPEED_MAX - 1).saturating_sub(value);
        log::debug!("speed slider {value} -> skip threshold {}", self.skip_threshold);
    }

    pub fn skip_threshold(&self) -> u32 {
        self.skip_threshold
    }

    /// Per-frame evaluation. Returns true when the simulation should be
    /// stepped this frame; the step must happen before this frame's redraw.
    pub fn advance(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.tick_count += 1;
        if self.tick_count >= self.skip_threshold {
            self.tick_count = 0;
            return true;
        }
        false
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}
