//! Frame-stepped sprite animation
//!
//! An `Animation` is a looping clock over a frame index range in a sprite
//! sheet. It advances on a fixed per-tick countdown rather than wall time,
//! so playback speed is tied to the simulation tick rate.

/// A looping animation over a contiguous-ish frame range.
///
/// `step` is how many sheet indices each advance moves by (sheets that lay
/// frames out with gaps use step > 1). When the frame would pass `last`,
/// it hard-resets to `first`, not to `first + excess`. For ranges whose
/// length is not divisible by `step` this produces a visible discontinuity
/// on wrap; that is defined behavior, kept for sheet-layout freedom.
#[derive(Debug, Clone)]
pub struct Animation {
    first: usize,
    last: usize,
    step: usize,
    /// How many ticks between frame advances.
    ticks_per_frame: f32,
    ticks_remaining: f32,
    frame: usize,
}

impl Animation {
    pub fn new(first: usize, last: usize, step: usize, ticks_per_frame: f32) -> Self {
        debug_assert!(first <= last, "animation range inverted: {first}..{last}");
        debug_assert!(step >= 1, "animation step must be at least 1");
        Self {
            first,
            last,
            step,
            ticks_per_frame,
            ticks_remaining: ticks_per_frame,
            frame: first,
        }
    }

    /// Advance the clock by one tick. The frame moves only when the
    /// countdown runs out, then the countdown reloads.
    pub fn update(&mut self) {
        self.ticks_remaining -= 1.0;
        if self.ticks_remaining < 0.0 {
            self.ticks_remaining = self.ticks_per_frame;
            self.frame += self.step;
            if self.frame > self.last {
                self.frame = self.first;
            }
        }
    }

    /// Current sprite-sheet frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Whether the clock sits on (or past) the final frame. Checked on the
    /// frame value itself, so an animation built with `first == last` is
    /// on its last frame immediately.
    pub fn is_last_frame(&self) -> bool {
        self.frame >= self.last
    }

    /// Restart from the first frame with a full countdown. Used when an
    /// action retriggers so it always plays from the start.
    pub fn reset(&mut self) {
        self.frame = self.first;
        self.ticks_remaining = self.ticks_per_frame;
    }
}
