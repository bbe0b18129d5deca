use super::constants::{
    PULSE_OPACITY_SWING, PULSE_RADIUS_SWING, PULSE_STEP_RAD, RICH_LINK_ALPHA, RICH_LINK_DISTANCE,
    RICH_MAX_PARTICLES, RICH_OPACITY_MIN, RICH_OPACITY_SPAN, RICH_PALETTE, RICH_PX_PER_PARTICLE,
    RICH_RADIUS_MIN, RICH_RADIUS_SPAN, RICH_SPEED_SPAN, PLAIN_LINK_ALPHA, PLAIN_LINK_DISTANCE,
    PLAIN_MAX_PARTICLES, PLAIN_OPACITY_MIN, PLAIN_OPACITY_SPAN, PLAIN_PX_PER_PARTICLE,
    PLAIN_RADIUS_MIN, PLAIN_RADIUS_SPAN, PLAIN_SPEED_SPAN, TEAL,
};
use glam::Vec2;
use rand::prelude::*;

/// Where particle colors come from.
#[derive(Clone, Copy, Debug)]
pub enum ColorPolicy {
    Fixed([u8; 3]),
    Palette(&'static [[u8; 3]]),
}

/// Spawn and linking parameters for one hero style.
///
/// Ranges are `min + rand * span` with `rand` in \[0, 1).
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub max_particles: usize,
    pub px_per_particle: f32,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    pub colors: ColorPolicy,
    pub pulse: bool,
    pub link_distance: f32,
    pub link_alpha: f32,
}

impl FieldParams {
    pub const RICH: FieldParams = FieldParams {
        max_particles: RICH_MAX_PARTICLES,
        px_per_particle: RICH_PX_PER_PARTICLE,
        speed_span: RICH_SPEED_SPAN,
        radius_min: RICH_RADIUS_MIN,
        radius_span: RICH_RADIUS_SPAN,
        opacity_min: RICH_OPACITY_MIN,
        opacity_span: RICH_OPACITY_SPAN,
        colors: ColorPolicy::Palette(&RICH_PALETTE),
        pulse: true,
        link_distance: RICH_LINK_DISTANCE,
        link_alpha: RICH_LINK_ALPHA,
    };

    pub const PLAIN: FieldParams = FieldParams {
        max_particles: PLAIN_MAX_PARTICLES,
        px_per_particle: PLAIN_PX_PER_PARTICLE,
        speed_span: PLAIN_SPEED_SPAN,
        radius_min: PLAIN_RADIUS_MIN,
        radius_span: PLAIN_RADIUS_SPAN,
        opacity_min: PLAIN_OPACITY_MIN,
        opacity_span: PLAIN_OPACITY_SPAN,
        colors: ColorPolicy::Fixed(TEAL),
        pulse: false,
        link_distance: PLAIN_LINK_DISTANCE,
        link_alpha: PLAIN_LINK_ALPHA,
    };

    /// Particle count for a surface of the given logical width.
    pub fn count_for_width(&self, width: f32) -> usize {
        if !(width > 0.0) {
            return 0;
        }
        ((width / self.px_per_particle).floor() as usize).min(self.max_particles)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: [u8; 3],
    /// Pulse phase in radians; `None` when the particle does not pulse.
    pub phase: Option<f32>,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, params: &FieldParams, size: Vec2) -> Self {
        let color = match params.colors {
            ColorPolicy::Fixed(c) => c,
            ColorPolicy::Palette(p) => *p.choose(rng).unwrap_or(&TEAL),
        };
        let pos = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * params.speed_span,
            (rng.gen::<f32>() - 0.5) * params.speed_span,
        );
        let radius = params.radius_min + rng.gen::<f32>() * params.radius_span;
        let opacity = params.opacity_min + rng.gen::<f32>() * params.opacity_span;
        let phase = params
            .pulse
            .then(|| rng.gen::<f32>() * std::f32::consts::TAU);
        Self {
            pos: Vec2::new(wrap_coord(pos.x, size.x), wrap_coord(pos.y, size.y)),
            vel,
            radius,
            opacity,
            color,
            phase,
        }
    }

    /// Integrate one frame of motion, wrap into `[0, size)`, advance the pulse.
    pub fn advance(&mut self, size: Vec2) {
        self.pos += self.vel;
        self.pos.x = wrap_coord(self.pos.x, size.x);
        self.pos.y = wrap_coord(self.pos.y, size.y);
        if let Some(phase) = self.phase.as_mut() {
            *phase += PULSE_STEP_RAD;
        }
    }

    /// Radius to draw this frame.
    #[inline]
    pub fn draw_radius(&self) -> f32 {
        match self.phase {
            Some(p) => self.radius + p.sin() * PULSE_RADIUS_SWING,
            None => self.radius,
        }
    }

    /// Opacity to draw this frame, clamped to \[0, 1\].
    #[inline]
    pub fn draw_opacity(&self) -> f32 {
        let o = match self.phase {
            Some(p) => self.opacity + p.sin() * PULSE_OPACITY_SWING,
            None => self.opacity,
        };
        o.clamp(0.0, 1.0)
    }
}

/// Toroidal wrap of `v` into `[0, extent)`.
///
/// `extent` itself maps to 0. A non-positive extent collapses everything to 0.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !v.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&v) {
        return v;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

/// Opacity of a connecting line between two particles `distance` apart.
///
/// Falls off linearly from `base_alpha` at 0 to exactly 0 at `threshold`;
/// returns `None` when no line should be drawn.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32, base_alpha: f32) -> Option<f32> {
    if distance < threshold {
        Some(base_alpha * (1.0 - distance / threshold))
    } else {
        None
    }
}

/// Fixed population of particles; never grows or shrinks after creation.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub params: FieldParams,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(params: FieldParams, size: Vec2, rng: &mut R) -> Self {
        let count = params.count_for_width(size.x);
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, &params, size))
            .collect();
        Self { params, particles }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn with_seed(params: FieldParams, size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(params, size, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn advance(&mut self, size: Vec2) {
        for p in &mut self.particles {
            p.advance(size);
        }
    }

    /// Visit every unordered pair closer than the link distance.
    ///
    /// Plain O(n²) sweep; the population is capped well below the size where
    /// a spatial index would pay off.
    pub fn for_each_link(&self, mut visit: impl FnMut(&Particle, &Particle, f32)) {
        let threshold = self.params.link_distance;
        let base = self.params.link_alpha;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if let Some(alpha) = link_alpha(d, threshold, base) {
                    visit(a, b, alpha);
                }
            }
        }
    }
}
