use super::constants::{
    HALO_OPACITY_SCALE, HALO_RADIUS_SCALE, LINK_WIDTH_PX, WAVE_GLOW_BLUR, WAVE_STEP_PX,
};
use super::particles::{FieldParams, ParticleField};
use super::waves::{plain_waves, rich_waves, Rgba, WaveSet};
use glam::Vec2;
use rand::prelude::*;

/// Visual flavor of the hero background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroStyle {
    /// Palette colors, pulsing halos, glowing waves.
    #[default]
    Rich,
    /// Single color, flat dots, no glow.
    Plain,
}

impl HeroStyle {
    /// Parse the `data-hero-style` attribute; unknown values fall back to rich.
    pub fn from_attr(v: Option<&str>) -> Self {
        match v.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("plain") => HeroStyle::Plain,
            _ => HeroStyle::Rich,
        }
    }

    pub fn field_params(self) -> FieldParams {
        match self {
            HeroStyle::Rich => FieldParams::RICH,
            HeroStyle::Plain => FieldParams::PLAIN,
        }
    }

    pub fn waves(self) -> WaveSet {
        match self {
            HeroStyle::Rich => rich_waves(),
            HeroStyle::Plain => plain_waves(),
        }
    }

    #[inline]
    pub fn glow(self) -> bool {
        matches!(self, HeroStyle::Rich)
    }

    #[inline]
    pub fn halo(self) -> bool {
        matches!(self, HeroStyle::Rich)
    }
}

/// Logical size of the drawing surface plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr) as u32,
            (self.height * self.dpr) as u32,
        )
    }
}

/// Soft shadow applied while stroking a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

/// Drawing primitives the hero needs, in logical pixels.
///
/// The frame logic never touches the browser directly; the web build paints
/// onto a 2D canvas context while host tests record the calls.
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32, glow: Option<Glow>);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// Everything the hero animation owns between frames.
pub struct HeroScene {
    pub style: HeroStyle,
    pub surface: Surface,
    pub field: ParticleField,
    pub waves: WaveSet,
    pub frame: u64,
    scratch: Vec<Vec2>,
}

impl HeroScene {
    pub fn new<R: Rng>(surface: Surface, style: HeroStyle, rng: &mut R) -> Self {
        let field = ParticleField::new(style.field_params(), surface.size(), rng);
        log::info!(
            "[hero] style={:?} size={:.0}x{:.0} dpr={:.2} particles={}",
            style,
            surface.width,
            surface.height,
            surface.dpr,
            field.len()
        );
        Self {
            style,
            surface,
            field,
            waves: style.waves(),
            frame: 0,
            scratch: Vec::new(),
        }
    }

    pub fn with_seed(surface: Surface, style: HeroStyle, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(surface, style, &mut rng)
    }

    /// Adopt new bounds. Particles keep their state and wrap against the new size.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Run one display refresh worth of work.
    pub fn step<P: Painter>(&mut self, painter: &mut P) {
        painter.clear(self.surface.width, self.surface.height);
        self.frame += 1;
        self.draw_waves(painter);
        self.field.advance(self.surface.size());
        self.draw_particles(painter);
        self.draw_links(painter);
    }

    /// Drive `frames` consecutive steps; the headless stand-in for the refresh loop.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn run_frames<P: Painter>(&mut self, painter: &mut P, frames: u64) {
        for _ in 0..frames {
            self.step(painter);
        }
    }

    fn draw_waves<P: Painter>(&mut self, painter: &mut P) {
        let w = self.surface.width;
        let h = self.surface.height;
        let glow = self.style.glow();
        for wave in &self.waves {
            self.scratch.clear();
            let mut x = 0.0_f32;
            while x < w {
                self.scratch.push(Vec2::new(x, wave.y_at(x, self.frame, h)));
                x += WAVE_STEP_PX;
            }
            let g = glow.then(|| Glow {
                color: wave.glow_color(),
                blur: WAVE_GLOW_BLUR,
            });
            painter.stroke_polyline(&self.scratch, wave.color, wave.width, g);
        }
    }

    fn draw_particles<P: Painter>(&self, painter: &mut P) {
        let halo = self.style.halo();
        for p in &self.field.particles {
            let r = p.draw_radius();
            let o = p.draw_opacity();
            if halo {
                painter.fill_circle(
                    p.pos,
                    r * HALO_RADIUS_SCALE,
                    Rgba::new(p.color, o * HALO_OPACITY_SCALE),
                );
            }
            painter.fill_circle(p.pos, r, Rgba::new(p.color, o));
        }
    }

    fn draw_links<P: Painter>(&self, painter: &mut P) {
        self.field.for_each_link(|a, b, alpha| {
            painter.stroke_line(a.pos, b.pos, Rgba::new(a.color, alpha), LINK_WIDTH_PX);
        });
    }
}
