//! Random simple polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   and radial jitter, and emit the vertices in increasing angle order
//!   around the origin. Angle-sorted star-shaped output is simple and
//!   counter-clockwise, so its signed area is positive.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point2D;
use crate::polygon::Polygon;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count; clamped to at least 3.
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to
    /// [0, 0.49] and further capped at `(n − 2)/4` so every angular gap
    /// stays at or below π (the counter-clockwise guarantee).
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon around the origin via radial jitter.
///
/// Vertices come out angle-sorted (counter-clockwise), so the result always
/// has positive signed area.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    // Signed area of a star-shaped polygon is ½ Σ rᵢrᵢ₊₁ sin(θᵢ₊₁−θᵢ), so
    // positivity needs every angular gap at or below π. The worst-case gap
    // is Δ(1 + 2a); capping a at (n − 2)/4 keeps Δ(1 + 2a) ≤ π.
    let aj_max = (((n as f64) - 2.0) / 4.0).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, aj_max);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let vertices: Vec<Point2D> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point2D::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(vertices)
}
