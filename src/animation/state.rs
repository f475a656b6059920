/// Jitter transform applied to one glyph at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// Cyclic row shift in pixels.
    pub x_shift: i32,
    /// Cyclic column shift in pixels.
    pub y_shift: i32,
    /// Rotation in degrees, counter-clockwise.
    pub angle: f64,
}

/// Inclusive limits the random walk is clamped to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Borders {
    /// `(min, max)` of `x_shift`.
    pub x: (i32, i32),
    /// `(min, max)` of `y_shift`.
    pub y: (i32, i32),
    /// `(min, max)` of `angle` in degrees.
    pub angle: (f64, f64),
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            x: (-5, 5),
            y: (-5, 5),
            angle: (-20.0, 20.0),
        }
    }
}

impl Borders {
    /// Clamp every component of `s` into its range.
    pub fn clamp(&self, s: AnimationState) -> AnimationState {
        AnimationState {
            x_shift: s.x_shift.clamp(self.x.0, self.x.1),
            y_shift: s.y_shift.clamp(self.y.0, self.y.1),
            angle: s.angle.clamp(self.angle.0, self.angle.1),
        }
    }

    /// Whether every component of `s` is within its range.
    pub fn contains(&self, s: &AnimationState) -> bool {
        (self.x.0..=self.x.1).contains(&s.x_shift)
            && (self.y.0..=self.y.1).contains(&s.y_shift)
            && (self.angle.0..=self.angle.1).contains(&s.angle)
    }
}
