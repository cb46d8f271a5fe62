//! Random admissible point clouds (seeded, replayable).
//!
//! Model
//! - Points are drawn uniformly from the square `[-scale, scale]²`.
//! - A fraction of the draws repeats an earlier point verbatim, and another
//!   fraction is snapped to a coarse grid so that collinear and duplicated
//!   configurations show up regularly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `bound::Bound::try_extend`, `benches/min_circle_bench.rs`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::POINT_XY_MAX;

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    /// Half-width of the sampling square. Clamped to `(0, POINT_XY_MAX]`.
    pub scale: f32,
    /// Probability that a draw repeats an earlier point.
    pub duplicate_frac: f64,
    /// Probability that a draw is rounded to integer multiples of `scale / 4`.
    pub grid_frac: f64,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 8,
            scale: POINT_XY_MAX,
            duplicate_frac: 0.1,
            grid_frac: 0.2,
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
    /// The usual SplitMix64 replay scheme: `(seed, index)` is folded through
    /// the finaliser into one `StdRng` seed, so a token reproduces its cloud
    /// regardless of which other indices were drawn.
    #[inline]
    fn to_std_rng(self) -> StdRng {
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

/// Draw `cfg.count` points inside `[-scale, scale]²`.
pub fn draw_points(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<(f32, f32)> {
    let mut rng = tok.to_std_rng();
    let scale = if cfg.scale.is_finite() && cfg.scale > 0.0 {
        cfg.scale.min(POINT_XY_MAX)
    } else {
        POINT_XY_MAX
    };
    let dup = cfg.duplicate_frac.clamp(0.0, 1.0);
    let grid = cfg.grid_frac.clamp(0.0, 1.0);
    let step = scale / 4.0;

    let mut out: Vec<(f32, f32)> = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        if !out.is_empty() && rng.gen_bool(dup) {
            let k = rng.gen_range(0..out.len());
            out.push(out[k]);
            continue;
        }
        let mut x = rng.gen_range(-scale..=scale);
        let mut y = rng.gen_range(-scale..=scale);
        if rng.gen_bool(grid) {
            x = ((x / step).round() * step).clamp(-scale, scale);
            y = ((y / step).round() * step).clamp(-scale, scale);
        }
        out.push((x, y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic_and_index_sensitive() {
        let cfg = PointCloudCfg::default();
        let a = draw_points(cfg, ReplayToken { seed: 7, index: 0 });
        let b = draw_points(cfg, ReplayToken { seed: 7, index: 0 });
        let c = draw_points(cfg, ReplayToken { seed: 7, index: 1 });
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), cfg.count);
    }

    #[test]
    fn points_stay_in_square() {
        let cfg = PointCloudCfg {
            count: 200,
            scale: 2.5,
            duplicate_frac: 0.3,
            grid_frac: 0.5,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 1, index: 3 });
        assert!(pts.iter().all(|&(x, y)| x.abs() <= 2.5 && y.abs() <= 2.5));
    }

    #[test]
    fn scale_is_clamped_to_domain() {
        let cfg = PointCloudCfg {
            scale: 1e6,
            ..PointCloudCfg::default()
        };
        let pts = draw_points(cfg, ReplayToken { seed: 2, index: 0 });
        assert!(pts
            .iter()
            .all(|&(x, y)| x.abs() <= POINT_XY_MAX && y.abs() <= POINT_XY_MAX));
    }
}
