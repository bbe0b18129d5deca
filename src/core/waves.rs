use super::constants::{
    BLUE, MINT, ORANGE, PURPLE, TEAL, WAVE_BASELINE_FRACTION, WAVE_GLOW_ALPHA, WAVE_HARMONIC_AMP,
    WAVE_HARMONIC_FREQ, WAVE_HARMONIC_SPEED,
};
use smallvec::SmallVec;

/// Straight RGB color plus a separate alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self { rgb, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { rgb: self.rgb, a }
    }

    /// CSS `rgba(...)` form accepted by canvas fill/stroke/shadow styles.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0],
            self.rgb[1],
            self.rgb[2],
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// One layer of the hero waveform.
///
/// Fields:
/// - `amplitude`: peak offset of the fundamental in logical px
/// - `frequency`: radians per logical px
/// - `speed`: radians per frame
/// - `color`: stroke color (alpha included)
/// - `width`: stroke width in logical px
#[derive(Clone, Copy, Debug)]
pub struct WaveGenerator {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub color: Rgba,
    pub width: f32,
}

impl WaveGenerator {
    /// Vertical offset of this layer at horizontal position `x` on frame `frame`.
    ///
    /// A fundamental plus a faster, slower-drifting harmonic at 30% amplitude,
    /// both riding on a baseline at 55% of the surface height.
    ///
    /// The phase is evaluated in f64: the frame counter grows without bound and
    /// f32 loses sub-frame resolution after a few days at 60 Hz.
    #[inline]
    pub fn y_at(&self, x: f32, frame: u64, surface_height: f32) -> f32 {
        let x = x as f64;
        let freq = self.frequency as f64;
        let amp = self.amplitude as f64;
        let t = frame as f64 * self.speed as f64;
        let fundamental = (x * freq + t).sin() * amp;
        let harmonic = (x * freq * WAVE_HARMONIC_FREQ as f64 + t * WAVE_HARMONIC_SPEED as f64)
            .sin()
            * amp
            * WAVE_HARMONIC_AMP as f64;
        baseline(surface_height) + (fundamental + harmonic) as f32
    }

    /// Shadow color used for the glow pass.
    #[inline]
    pub fn glow_color(&self) -> Rgba {
        self.color.with_alpha(WAVE_GLOW_ALPHA)
    }
}

#[inline]
pub fn baseline(surface_height: f32) -> f32 {
    surface_height * WAVE_BASELINE_FRACTION
}

pub type WaveSet = SmallVec<[WaveGenerator; 5]>;

const fn wave(amplitude: f32, frequency: f32, speed: f32, color: Rgba, width: f32) -> WaveGenerator {
    WaveGenerator {
        amplitude,
        frequency,
        speed,
        color,
        width,
    }
}

/// Five layered, glowing waves for the rich hero.
pub fn rich_waves() -> WaveSet {
    SmallVec::from_buf([
        wave(50.0, 0.008, 0.015, Rgba::new(TEAL, 0.25), 2.5),
        wave(30.0, 0.012, 0.02, Rgba::new(MINT, 0.15), 2.0),
        wave(70.0, 0.005, 0.01, Rgba::new(BLUE, 0.12), 1.5),
        wave(20.0, 0.02, 0.025, Rgba::new(ORANGE, 0.10), 1.5),
        wave(35.0, 0.015, 0.018, Rgba::new(PURPLE, 0.08), 1.0),
    ])
}

/// Three flat waves for the plain hero.
pub fn plain_waves() -> WaveSet {
    let mut set = WaveSet::new();
    set.push(wave(40.0, 0.008, 0.015, Rgba::new(TEAL, 0.2), 2.0));
    set.push(wave(25.0, 0.013, 0.02, Rgba::new(TEAL, 0.12), 1.5));
    set.push(wave(60.0, 0.005, 0.01, Rgba::new(BLUE, 0.1), 1.0));
    set
}
