//! Easing curves for layer animations.
//!
//! The four named curves match the CSS timing functions of the same name and
//! are evaluated as cubic Béziers from (0,0) to (1,1).

use serde::{Deserialize, Serialize};

/// Cubic Bézier control points (x1, y1, x2, y2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
    }

    fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Map linear progress `x` in `[0, 1]` to eased progress.
    ///
    /// Solves `bezier_x(t) = x` with Newton-Raphson, falling back to bisection
    /// when the slope flattens out.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        let mut converged = false;
        for _ in 0..8 {
            let err = Self::bezier(self.x1, self.x2, t) - x;
            if err.abs() < 1e-9 {
                converged = true;
                break;
            }
            let slope = Self::bezier_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-9 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        if !converged {
            let (mut lo, mut hi) = (0.0, 1.0);
            t = x;
            for _ in 0..40 {
                let value = Self::bezier(self.x1, self.x2, t);
                if (value - x).abs() < 1e-9 {
                    break;
                }
                if value < x {
                    lo = t;
                } else {
                    hi = t;
                }
                t = (lo + hi) * 0.5;
            }
        }

        Self::bezier(self.y1, self.y2, t)
    }
}

/// Named easing curve attached to an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Control points of the curve.
    pub fn curve(self) -> CubicBezier {
        match self {
            Self::Linear => CubicBezier::new(0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            _ => self.curve().evaluate(t),
        }
    }

    /// Display label used by pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::EaseIn => "Ease In",
            Self::EaseOut => "Ease Out",
            Self::EaseInOut => "Ease In-Out",
        }
    }
}
