//! Decorative blob animation behind the "load an image" panel.
//!
//! Shapes live in a `[-1.25, 1.25]` square, matching the static placeholder,
//! so the canvas bounds and the placeholder artwork line up exactly when the
//! animated renderer takes over.

use rand::Rng;

/// One control point of a closed blob outline:
/// `[in_cx, in_cy, x, y, out_cx, out_cy]`.
pub type BlobPoint = [f64; 6];

/// Curve samples per segment when flattening an outline for the canvas.
const SAMPLES_PER_SEGMENT: usize = 8;

/// Tangent length factor for the cubic handles. Close to the circle-fitting
/// constant for 8 points; exact circularity does not matter here.
const HANDLE_SCALE: f64 = 0.22;

/// Fixed radius patterns for the two placeholder blobs. These are what the
/// static artwork shows until (and unless) the animation takes over.
const START_RADII: [([f64; 8], f64); 2] = [
    ([1.05, 0.94, 1.00, 0.90, 1.02, 0.95, 0.98, 1.08], 1.0),
    ([0.97, 1.06, 0.92, 1.04, 0.96, 1.01, 0.93, 1.02], 0.78),
];

/// Build the closed outline through points placed at even angles with the
/// given radii, with smooth cubic handles derived from neighbouring points.
fn blob_points(radii: &[f64], scale: f64) -> Vec<BlobPoint> {
    let n = radii.len();
    let pos: Vec<(f64, f64)> = radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let a = (i as f64) * std::f64::consts::TAU / (n as f64);
            (a.cos() * r * scale, a.sin() * r * scale)
        })
        .collect();

    (0..n)
        .map(|i| {
            let prev = pos[(i + n - 1) % n];
            let next = pos[(i + 1) % n];
            let (x, y) = pos[i];
            // Tangent along the chord between the neighbours.
            let tx = (next.0 - prev.0) * HANDLE_SCALE;
            let ty = (next.1 - prev.1) * HANDLE_SCALE;
            [x - tx, y - ty, x, y, x + tx, y + ty]
        })
        .collect()
}

/// The static placeholder outlines. Deterministic: no randomness, no state.
pub fn start_blobs() -> Vec<Vec<BlobPoint>> {
    START_RADII
        .iter()
        .map(|(radii, scale)| blob_points(radii, *scale))
        .collect()
}

/// Flatten one closed outline into a polyline for the canvas, sampling each
/// cubic segment `SAMPLES_PER_SEGMENT` times. The first point is repeated at
/// the end so the outline closes.
pub fn sample_loop(points: &[BlobPoint]) -> Vec<(f64, f64)> {
    let n = points.len();
    let mut out = Vec::with_capacity(n * SAMPLES_PER_SEGMENT + 1);
    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let (x0, y0) = (p0[2], p0[3]);
        let (cx0, cy0) = (p0[4], p0[5]);
        let (cx1, cy1) = (p1[0], p1[1]);
        let (x1, y1) = (p1[2], p1[3]);
        for s in 0..SAMPLES_PER_SEGMENT {
            let t = s as f64 / SAMPLES_PER_SEGMENT as f64;
            let u = 1.0 - t;
            let x = u * u * u * x0 + 3.0 * u * u * t * cx0 + 3.0 * u * t * t * cx1 + t * t * t * x1;
            let y = u * u * u * y0 + 3.0 * u * u * t * cy0 + 3.0 * u * t * t * cy1 + t * t * t * y1;
            out.push((x, y));
        }
    }
    if let Some(&first) = out.first() {
        out.push(first);
    }
    out
}

#[derive(Debug)]
struct AnimBlob {
    base: Vec<f64>,
    amp: Vec<f64>,
    speed: Vec<f64>,
    phase: Vec<f64>,
    scale: f64,
}

/// Continuous renderer the visual coordinator hands the canvas to once it has
/// loaded. Each control point's radius oscillates independently so the blobs
/// wobble without ever self-intersecting.
#[derive(Debug)]
pub struct BlobAnim {
    blobs: Vec<AnimBlob>,
    t: f64,
}

impl BlobAnim {
    /// Assemble the animation from the placeholder shapes plus random drift
    /// parameters. This is the "module load" work: it runs on a worker thread
    /// so the first frame of the screen never waits for it.
    pub fn build() -> Self {
        let mut rng = rand::rng();
        let blobs = START_RADII
            .iter()
            .map(|(radii, scale)| AnimBlob {
                base: radii.to_vec(),
                amp: radii.iter().map(|_| rng.random_range(0.02..0.08)).collect(),
                speed: radii.iter().map(|_| rng.random_range(0.6..1.6)).collect(),
                phase: radii
                    .iter()
                    .map(|_| rng.random_range(0.0..std::f64::consts::TAU))
                    .collect(),
                scale: *scale,
            })
            .collect();
        BlobAnim { blobs, t: 0.0 }
    }

    /// Advance the animation clock by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.t += dt;
    }

    /// Current outlines, flattened for the canvas.
    pub fn paths(&self) -> Vec<Vec<(f64, f64)>> {
        self.blobs
            .iter()
            .map(|b| {
                let radii: Vec<f64> = b
                    .base
                    .iter()
                    .zip(b.amp.iter().zip(b.speed.iter().zip(b.phase.iter())))
                    .map(|(base, (amp, (speed, phase)))| {
                        base + amp * (self.t * speed + phase).sin()
                    })
                    .collect();
                sample_loop(&blob_points(&radii, b.scale))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_blobs_are_deterministic_and_closed() {
        let a = start_blobs();
        let b = start_blobs();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
        for outline in &a {
            let samples = sample_loop(outline);
            assert_eq!(samples.first(), samples.last());
            assert!(samples.len() > outline.len());
        }
    }

    #[test]
    fn outlines_stay_bounded() {
        let mut anim = BlobAnim::build();
        for _ in 0..50 {
            anim.step(0.1);
            for path in anim.paths() {
                for (x, y) in path {
                    assert!(x.abs() <= 1.3 && y.abs() <= 1.3, "({x}, {y}) escaped");
                }
            }
        }
    }

    #[test]
    fn stepping_moves_the_outline() {
        let mut anim = BlobAnim::build();
        let before = anim.paths();
        anim.step(0.5);
        assert_ne!(before, anim.paths());
    }
}
