//! Implicit animations.
//!
//! Widgets stay pure functions of their input: they ask the [`Animator`] for the value to paint
//! this frame given a target, and the animator remembers (per [`Id`]) where the value was coming
//! from. When the target changes, a new tween starts from the currently displayed value.
//!
//! ```ignore
//! let bg = ui.anim.animate_color(id, target_bg, Duration::from_millis(300), Easing::EaseInOut, ui.now);
//! ```
//!
//! Entries not touched between [`Animator::begin_frame`] and [`Animator::end_frame`] are dropped,
//! so widgets that disappear do not leak state.

use super::color;
use super::id::Id;
use super::style::Color;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicOut,
}

impl Easing {
    /// Map normalized time (clamped to 0..=1) to normalized progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

pub trait Lerp: Copy + PartialEq {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for (u8, u8, u8) {
    fn lerp(self, to: Self, t: f32) -> Self {
        color::lerp(self, to, t)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tween<V> {
    pub from: V,
    pub to: V,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl<V: Lerp> Tween<V> {
    pub fn new(from: V, to: V, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A tween that is already at rest on `value`.
    pub fn settled(value: V, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, Easing::Linear)
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> V {
        self.from.lerp(self.to, self.easing.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot<V> {
    tween: Tween<V>,
    seen: u64,
}

#[derive(Debug, Default)]
pub struct Animator {
    frame: u64,
    values: FxHashMap<Id, Slot<f32>>,
    colors: FxHashMap<Id, Slot<(u8, u8, u8)>>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn end_frame(&mut self) {
        let frame = self.frame;
        self.values.retain(|_, slot| slot.seen == frame);
        self.colors.retain(|_, slot| slot.seen == frame);
    }

    pub fn len(&self) -> usize {
        self.values.len() + self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn animate_value(
        &mut self,
        id: Id,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> f32 {
        drive(&mut self.values, self.frame, id, target, duration, easing, now)
    }

    /// Like [`Animator::animate_value`] for RGB colors. Non-RGB targets are returned as-is.
    pub fn animate_color(
        &mut self,
        id: Id,
        target: Color,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Color {
        let Some(rgb) = target.rgb() else {
            return target;
        };
        let (r, g, b) = drive(&mut self.colors, self.frame, id, rgb, duration, easing, now);
        Color::Rgb(r, g, b)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.values.values().any(|s| !s.tween.is_finished(now))
            || self.colors.values().any(|s| !s.tween.is_finished(now))
    }
}

fn drive<V: Lerp>(
    map: &mut FxHashMap<Id, Slot<V>>,
    frame: u64,
    id: Id,
    target: V,
    duration: Duration,
    easing: Easing,
    now: Instant,
) -> V {
    match map.entry(id) {
        Entry::Occupied(mut entry) => {
            let slot = entry.get_mut();
            slot.seen = frame;
            if slot.tween.to != target {
                let current = slot.tween.value_at(now);
                slot.tween = Tween::new(current, target, now, duration, easing);
            }
            slot.tween.value_at(now)
        }
        Entry::Vacant(entry) => {
            // First sighting: nothing to animate from.
            entry.insert(Slot {
                tween: Tween::settled(target, now),
                seen: frame,
            });
            target
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/anim.rs"]
mod tests;
