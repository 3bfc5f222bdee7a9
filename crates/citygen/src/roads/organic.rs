//! Organic road centerlines.
//!
//! A straight street is resampled at 12 parameters and pushed sideways by
//! a sum of 2-3 sine harmonics plus per-point jitter. Harmonics at mixed
//! frequencies (3, 6, 9 x pi) keep the curve from looking periodic while
//! staying deterministic and bounded; endpoints stay pinned so streets
//! still meet the city boundary.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ORGANIC_JITTER_FACTOR, ORGANIC_SAMPLES};

struct Harmonic {
    frequency: f32,
    phase: f32,
    amplitude: f32,
}

/// Sample a curved centerline between `start` and `end`.
///
/// `rng` must be the road's own sub-RNG (keyed on the road index) so the
/// curve is a pure function of the seed and the road's position in the
/// network.
pub fn curved_centerline(
    start: Vec2,
    end: Vec2,
    amplitude: f32,
    rng: &mut ChaCha8Rng,
) -> Vec<Vec2> {
    let span = end - start;
    let length = span.length();
    if length <= 0.0 || amplitude <= 0.0 {
        return vec![start, end];
    }
    let dir = span / length;
    let perp = Vec2::new(-dir.y, dir.x);

    let count = rng.gen_range(2..=3);
    let harmonics: Vec<Harmonic> = (0..count)
        .map(|h| Harmonic {
            frequency: 3.0 * (h + 1) as f32 * PI,
            phase: rng.gen_range(0.0..TAU),
            // Halving per harmonic keeps the summed offset inside the
            // configured amplitude.
            amplitude: amplitude / 2_f32.powi(h + 1),
        })
        .collect();

    let jitter_span = ORGANIC_JITTER_FACTOR * amplitude;
    let last = ORGANIC_SAMPLES - 1;
    let mut points = Vec::with_capacity(ORGANIC_SAMPLES);
    for k in 0..ORGANIC_SAMPLES {
        let t = k as f32 / last as f32;
        let along = start + dir * (length * t);
        if k == 0 || k == last {
            points.push(along);
            continue;
        }
        let mut offset: f32 = harmonics
            .iter()
            .map(|h| h.amplitude * (h.frequency * t + h.phase).sin())
            .sum();
        offset += rng.gen_range(-jitter_span..=jitter_span);
        points.push(along + perp * offset);
    }
    points
}
