use std::sync::Arc;

use rand::Rng;

use crate::{
    animation::state::{AnimationState, Borders},
    foundation::core::{Background, Raster},
    transform::{affine::rotate_deg, shift},
};

/// Per-step angle increments are drawn from `[-ANGLE_STEP, ANGLE_STEP)`.
const ANGLE_STEP: f64 = 2.0;

/// One glyph plus the bounded random walk that animates it.
///
/// The walk is stored as a queue of [`AnimationState`]s indexed by frame. The
/// running totals (`x_shift`, `y_shift`, `angle`) are the accumulators the
/// next extension step continues from; they are always within [`Borders`].
#[derive(Clone, Debug)]
pub struct Letter {
    glyph: Arc<Raster>,
    max_shift: i32,
    borders: Borders,
    fill: f32,

    x_shift: i32,
    y_shift: i32,
    angle: f64,

    states: Vec<AnimationState>,
}

impl Letter {
    /// Seed the walk with one random state. Shifts come from
    /// `[-max_shift, max_shift]`, the angle from `[-2, 2)` degrees.
    pub fn new<R: Rng + ?Sized>(
        glyph: Arc<Raster>,
        max_shift: u32,
        background: Background,
        rng: &mut R,
    ) -> Self {
        let max_shift = i32::try_from(max_shift).unwrap_or(i32::MAX);
        let borders = Borders::default();
        let init = borders.clamp(AnimationState {
            x_shift: rng.random_range(-max_shift..=max_shift),
            y_shift: rng.random_range(-max_shift..=max_shift),
            angle: rng.random_range(-ANGLE_STEP..ANGLE_STEP),
        });

        Self {
            glyph,
            max_shift,
            borders,
            fill: background.fill(),
            x_shift: init.x_shift,
            y_shift: init.y_shift,
            angle: init.angle,
            states: vec![init],
        }
    }

    /// Append `steps` walk states. Each one adds a fresh increment to the
    /// running totals and clamps them, so values stick at the borders.
    ///
    /// With `plus_reverse` the queue is then followed by its own full reversal,
    /// giving a palindrome of length `2 * len` that loops seamlessly.
    pub fn extend_queue<R: Rng + ?Sized>(
        &mut self,
        steps: usize,
        plus_reverse: bool,
        rng: &mut R,
    ) {
        self.states.reserve(if plus_reverse {
            2 * (self.states.len() + steps)
        } else {
            steps
        });

        for _ in 0..steps {
            let next = self.borders.clamp(AnimationState {
                x_shift: self
                    .x_shift
                    .saturating_add(rng.random_range(-self.max_shift..=self.max_shift)),
                y_shift: self
                    .y_shift
                    .saturating_add(rng.random_range(-self.max_shift..=self.max_shift)),
                angle: self.angle + rng.random_range(-ANGLE_STEP..ANGLE_STEP),
            });
            self.x_shift = next.x_shift;
            self.y_shift = next.y_shift;
            self.angle = next.angle;
            self.states.push(next);
        }

        if plus_reverse {
            let reversed: Vec<AnimationState> = self.states.iter().rev().copied().collect();
            self.states.extend(reversed);
        }
    }

    /// Render the state at `index`. An index past the end of the queue logs a
    /// warning and renders state 0.
    pub fn render_state(&self, index: usize) -> Raster {
        let state = match self.states.get(index) {
            Some(s) => *s,
            None => {
                tracing::warn!(
                    index,
                    len = self.states.len(),
                    "requested state is out of range, falling back to state 0"
                );
                self.states[0]
            }
        };
        self.apply(state)
    }

    /// Roll rows by `x_shift`, roll columns by `y_shift`, then rotate by
    /// `angle` with the background fill.
    pub fn apply(&self, state: AnimationState) -> Raster {
        let im = shift::roll_rows(&self.glyph, state.x_shift);
        let im = shift::roll_cols(&im, state.y_shift);
        rotate_deg(&im, state.angle, self.fill)
    }

    /// The full walk, one state per frame.
    pub fn states(&self) -> &[AnimationState] {
        &self.states
    }

    /// The untransformed glyph.
    pub fn glyph(&self) -> &Arc<Raster> {
        &self.glyph
    }

    /// Limits the walk is clamped to.
    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Value for pixels exposed by rotation.
    pub fn fill(&self) -> f32 {
        self.fill
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/letter.rs"]
mod tests;
