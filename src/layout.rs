//! Force layout: spread tweet dots over the canvas without overlap.
//!
//! A d3-style velocity simulation, reduced to the two forces this dashboard
//! needs: a weak pull toward the canvas center and a pairwise collision pass
//! that keeps point centers at least [`LayoutParams::min_separation`] apart.
//! The simulation runs a fixed number of ticks rather than to convergence,
//! so its cost is bounded by construction.
//!
//! The only nondeterminism in the d3 original is the jitter used to separate
//! exactly coincident points; here that jitter comes from a seeded RNG, so
//! equal inputs always produce equal layouts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::tweet::TweetPoint;

/// Alpha value at which d3 considers the simulation finished; used to derive
/// the per-tick cooling rate from the tick count.
const MIN_ALPHA: f64 = 0.001;

/// Fraction of velocity carried over between ticks (d3's `1 - velocityDecay`).
const VELOCITY_RETAIN: f64 = 0.6;

/// Upper bound on post-run collision passes; keeps the settle loop bounded
/// when the canvas is too small to satisfy the separation constraint at all.
const MAX_SETTLE_PASSES: usize = 32;

/// Parameters of one layout run.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Canvas width in logical units.
    pub width: f64,
    /// Canvas height in logical units.
    pub height: f64,
    /// Clamp inset on every side; no point center ever leaves
    /// `[padding, width - padding] × [padding, height - padding]`.
    pub padding: f64,
    /// Fraction of a full spring step toward canvas center applied per tick,
    /// scaled by the cooling factor.
    pub center_strength: f64,
    /// Minimum allowed distance between any two point centers.
    pub min_separation: f64,
    /// Fixed tick count. The simulation never checks for convergence.
    pub iterations: usize,
    /// Seed for the coincident-point jitter RNG. Fixed by default so layouts
    /// are reproducible.
    pub seed: u64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 20.0,
            center_strength: 0.1,
            min_separation: 10.0,
            iterations: 300,
            seed: 0x5EED_CAFE,
        }
    }
}

/// Run the force simulation over `points`, writing final positions into
/// their `x`/`y` fields.
///
/// Points are expected at the origin (freshly loaded); any starting position
/// works, it just changes where the relaxation settles. O(n² · iterations).
pub fn run_layout(points: &mut [TweetPoint], params: &LayoutParams) {
    if points.is_empty() {
        return;
    }

    let cx = params.width / 2.0;
    let cy = params.height / 2.0;
    let alpha_decay = 1.0 - MIN_ALPHA.powf(1.0 / params.iterations.max(1) as f64);

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut vx = vec![0.0f64; points.len()];
    let mut vy = vec![0.0f64; points.len()];
    let mut alpha = 1.0f64;

    for _ in 0..params.iterations {
        alpha += (0.0 - alpha) * alpha_decay;

        // Centering pull, cooled by alpha like every d3 force.
        for (i, p) in points.iter().enumerate() {
            vx[i] += (cx - p.x) * params.center_strength * alpha;
            vy[i] += (cy - p.y) * params.center_strength * alpha;
        }

        // Integrate.
        for (i, p) in points.iter_mut().enumerate() {
            vx[i] *= VELOCITY_RETAIN;
            vy[i] *= VELOCITY_RETAIN;
            p.x += vx[i];
            p.y += vy[i];
        }

        separate_pairs(points, params.min_separation, &mut rng);
        clamp_to_canvas(points, params);
    }

    // The last tick's centering drift can leave hairline overlaps behind the
    // single collision pass, so settle with extra passes until one of them
    // makes no adjustment. Bounded, in case the canvas is simply too small.
    for _ in 0..MAX_SETTLE_PASSES {
        let adjusted = separate_pairs(points, params.min_separation, &mut rng);
        clamp_to_canvas(points, params);
        if !adjusted {
            break;
        }
    }
}

/// Keep every point inside the padded canvas, whatever the forces did.
fn clamp_to_canvas(points: &mut [TweetPoint], params: &LayoutParams) {
    let (x_max, y_max) = (params.width - params.padding, params.height - params.padding);
    for p in points.iter_mut() {
        p.x = p.x.clamp(params.padding, x_max);
        p.y = p.y.clamp(params.padding, y_max);
    }
}

/// One collision pass: push every pair closer than `min_separation` apart
/// along the pair axis, half the overlap each. Returns whether any pair
/// needed adjusting.
fn separate_pairs(points: &mut [TweetPoint], min_separation: f64, rng: &mut StdRng) -> bool {
    let mut adjusted = false;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let mut dx = points[j].x - points[i].x;
            let mut dy = points[j].y - points[i].y;
            let mut dist = (dx * dx + dy * dy).sqrt();

            if dist >= min_separation {
                continue;
            }

            // Coincident pair: the push direction is undefined, so nudge it
            // apart with a sub-microscopic jitter first (d3 does the same,
            // just with an unseeded random()).
            if dist < f64::EPSILON {
                dx = (rng.gen::<f64>() - 0.5) * 1e-6;
                dy = (rng.gen::<f64>() - 0.5) * 1e-6;
                dist = (dx * dx + dy * dy).sqrt();
                if dist < f64::EPSILON {
                    dx = 1e-6;
                    dy = 0.0;
                    dist = 1e-6;
                }
            }

            let push = (min_separation - dist) / 2.0;
            let (ux, uy) = (dx / dist, dy / dist);
            points[i].x -= ux * push;
            points[i].y -= uy * push;
            points[j].x += ux * push;
            points[j].y += uy * push;
            adjusted = true;
        }
    }
    adjusted
}
