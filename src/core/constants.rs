// Shared tuning constants for the hero animation.

// Waveforms
pub const WAVE_BASELINE_FRACTION: f32 = 0.55; // baseline as a fraction of surface height
pub const WAVE_STEP_PX: f32 = 2.0; // horizontal sampling step (logical px)
pub const WAVE_HARMONIC_FREQ: f32 = 1.5;
pub const WAVE_HARMONIC_SPEED: f32 = 0.7;
pub const WAVE_HARMONIC_AMP: f32 = 0.3;
pub const WAVE_GLOW_BLUR: f32 = 12.0;
pub const WAVE_GLOW_ALPHA: f32 = 0.4;

// Particles
pub const PULSE_STEP_RAD: f32 = 0.02; // phase advance per frame
pub const PULSE_RADIUS_SWING: f32 = 0.5;
pub const PULSE_OPACITY_SWING: f32 = 0.1;
pub const HALO_RADIUS_SCALE: f32 = 3.0;
pub const HALO_OPACITY_SCALE: f32 = 0.15;

// Connections
pub const LINK_WIDTH_PX: f32 = 0.8;

// Rich hero
pub const RICH_MAX_PARTICLES: usize = 90;
pub const RICH_PX_PER_PARTICLE: f32 = 14.0;
pub const RICH_SPEED_SPAN: f32 = 0.5; // velocity drawn from [-span/2, span/2)
pub const RICH_RADIUS_MIN: f32 = 0.8;
pub const RICH_RADIUS_SPAN: f32 = 2.5;
pub const RICH_OPACITY_MIN: f32 = 0.15;
pub const RICH_OPACITY_SPAN: f32 = 0.5;
pub const RICH_LINK_DISTANCE: f32 = 150.0;
pub const RICH_LINK_ALPHA: f32 = 0.12;

// Plain hero
pub const PLAIN_MAX_PARTICLES: usize = 60;
pub const PLAIN_PX_PER_PARTICLE: f32 = 20.0;
pub const PLAIN_SPEED_SPAN: f32 = 0.4;
pub const PLAIN_RADIUS_MIN: f32 = 0.5;
pub const PLAIN_RADIUS_SPAN: f32 = 1.5;
pub const PLAIN_OPACITY_MIN: f32 = 0.1;
pub const PLAIN_OPACITY_SPAN: f32 = 0.4;
pub const PLAIN_LINK_DISTANCE: f32 = 120.0;
pub const PLAIN_LINK_ALPHA: f32 = 0.15;

// Palette (teal, blue, orange, mint, purple)
pub const TEAL: [u8; 3] = [0, 212, 170];
pub const BLUE: [u8; 3] = [59, 130, 246];
pub const ORANGE: [u8; 3] = [255, 77, 0];
pub const MINT: [u8; 3] = [0, 255, 208];
pub const PURPLE: [u8; 3] = [130, 100, 255];

pub const RICH_PALETTE: [[u8; 3]; 5] = [TEAL, BLUE, ORANGE, MINT, PURPLE];
