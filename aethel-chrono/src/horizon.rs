//! Event-horizon trajectory of a folded fragment.
//!
//! A spiral whose radius grows with gravity and whose rim is perturbed by a
//! `sin(5t)` ripple. Points are returned for an external renderer.

use serde::{Deserialize, Serialize};

use crate::consts::{INSTABILITY_GRAVITY, SPIRAL_DEPTH, SPIRAL_SPAN};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `samples` evenly spaced values over `[0, end]`, both ends included.
fn linspace(end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        end / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |i| i as f64 * step)
}

///
/// Sample the event-horizon spiral for a gravity factor.
///
/// With `t` over `[0, 10]` and `z` over `[0, 5]`:
/// `r = t * (1 + 0.1 * gravity)`, `noise = sin(5t) * gravity / 5`,
/// `x = (r + noise) * cos(t)`, `y = (r + noise) * sin(t)`.
///
pub fn event_horizon_spiral(gravity: f64, samples: usize) -> Vec<SpiralPoint> {
    linspace(SPIRAL_SPAN, samples)
        .zip(linspace(SPIRAL_DEPTH, samples))
        .map(|(t, z)| {
            let r = t * (1.0 + 0.1 * gravity);
            let noise = (t * 5.0).sin() * (gravity / 5.0);
            SpiralPoint {
                x: (r + noise) * t.cos(),
                y: (r + noise) * t.sin(),
                z,
            }
        })
        .collect()
}

/// Whether the fold has left three-dimensional space (gravity above 15).
pub fn is_dimensionally_unstable(gravity: f64) -> bool {
    gravity > INSTABILITY_GRAVITY
}
