//! The waveshaper bank.
//!
//! Eight pure `sample -> sample` transfer functions. Each takes a sample that
//! has already been multiplied by the drive gain, plus the current threshold,
//! and returns the shaped sample. None of them allocate or keep state.
//!
//! | Index | Shaper | Transfer function | Character |
//! |-------|--------|-------------------|-----------|
//! | 0 | [`hard_clip`] | `clamp(x, -t, t)` | Harsh, buzzy |
//! | 1 | [`cubic_soft_clip`] | `x - x³/3`, `±2/3` for `\|x\| ≥ 1` | Smooth, gentle knee |
//! | 2 | [`soft_clip`] | `tanh(x)` | Warm, tube-like |
//! | 3 | [`full_wave_rectify`] | `\|x\|` | Octave-up, even harmonics |
//! | 4 | [`half_wave_rectify`] | `max(x, 0)` | Gated, even + odd |
//! | 5 | [`foldback`] | reflect around `±t` | Complex, synthy |
//! | 6 | [`bit_crush`] | quantize to `2^(N-1)` steps | Lo-fi, stepped |
//! | 7 | [`square`] | `sign(x) · t` | Square wave fuzz |
//!
//! Outputs of indices 0, 1, 2, 5, 6 and 7 stay within `max(t, 1)` for any
//! input. The rectifiers pass magnitude through unchanged; the engine's final
//! threshold clamp bounds them.

use libm::{roundf, tanhf};

/// Upper bound on fold-back reflections per sample.
///
/// Past this many reflections the sample is hard clipped instead, so a huge
/// drive with a tiny threshold costs at most this many iterations.
pub const MAX_FOLDS: usize = 64;

/// Bit depth `N` of the bit crusher.
pub const CRUSH_BITS: u32 = 4;

/// Quantization steps per unit amplitude: `2^(N-1)`.
const CRUSH_STEPS: f32 = (1u32 << (CRUSH_BITS - 1)) as f32;

/// Waveshaping algorithm selection.
///
/// The discriminant is the host-facing mode index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shaper {
    /// Hard clipping at ±threshold.
    #[default]
    HardClip = 0,
    /// Cubic soft clipping, saturating at ±2/3.
    CubicSoftClip = 1,
    /// Hyperbolic tangent soft clipping.
    Tanh = 2,
    /// Full-wave rectifier.
    FullWaveRectify = 3,
    /// Half-wave rectifier.
    HalfWaveRectify = 4,
    /// Fold-back at ±threshold.
    Foldback = 5,
    /// Amplitude quantization to [`CRUSH_BITS`] bits.
    BitCrush = 6,
    /// Sign function scaled to the threshold.
    Square = 7,
}

impl Shaper {
    /// Number of shapers in the bank.
    pub const COUNT: usize = 8;

    /// Every shaper, in index order.
    pub const ALL: [Shaper; Self::COUNT] = [
        Shaper::HardClip,
        Shaper::CubicSoftClip,
        Shaper::Tanh,
        Shaper::FullWaveRectify,
        Shaper::HalfWaveRectify,
        Shaper::Foldback,
        Shaper::BitCrush,
        Shaper::Square,
    ];

    /// Look up a shaper by mode index.
    ///
    /// Indices past the end of the bank select the last shaper. The mode
    /// parameter spans `[0, 8]`, so its top value lands here as 8.
    ///
    /// ```rust
    /// use grit_core::Shaper;
    ///
    /// assert_eq!(Shaper::from_index(2), Shaper::Tanh);
    /// assert_eq!(Shaper::from_index(8), Shaper::Square);
    /// ```
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    /// Mode index of this shaper.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Shaper::HardClip => "Hard Clip",
            Shaper::CubicSoftClip => "Soft Clip (Cubic)",
            Shaper::Tanh => "Soft Clip (Tanh)",
            Shaper::FullWaveRectify => "Full-Wave Rectifier",
            Shaper::HalfWaveRectify => "Half-Wave Rectifier",
            Shaper::Foldback => "Fold-Back",
            Shaper::BitCrush => "Bit Crusher",
            Shaper::Square => "Square",
        }
    }

    /// Apply this shaper to a pre-gained sample.
    #[inline]
    pub fn apply(self, x: f32, threshold: f32) -> f32 {
        match self {
            Shaper::HardClip => hard_clip(x, threshold),
            Shaper::CubicSoftClip => cubic_soft_clip(x),
            Shaper::Tanh => soft_clip(x),
            Shaper::FullWaveRectify => full_wave_rectify(x),
            Shaper::HalfWaveRectify => half_wave_rectify(x),
            Shaper::Foldback => foldback(x, threshold),
            Shaper::BitCrush => bit_crush(x),
            Shaper::Square => square(x, threshold),
        }
    }
}

/// Hard clip to ±threshold.
///
/// Written with `max`/`min` rather than `clamp`, which panics on a NaN bound.
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.max(-threshold).min(threshold)
}

/// Cubic soft clip.
///
/// `x - x³/3` inside the unit interval, flat at `±2/3` outside it. The two
/// pieces meet with matching value and zero slope at `|x| = 1`.
#[inline]
pub fn cubic_soft_clip(x: f32) -> f32 {
    if x >= 1.0 {
        2.0 / 3.0
    } else if x <= -1.0 {
        -2.0 / 3.0
    } else {
        x - x * x * x / 3.0
    }
}

/// Soft clip using hyperbolic tangent.
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Full-wave rectifier: `|x|`.
#[inline]
pub fn full_wave_rectify(x: f32) -> f32 {
    x.abs()
}

/// Half-wave rectifier: negative half-cycles are silenced.
#[inline]
pub fn half_wave_rectify(x: f32) -> f32 {
    if x > 0.0 { x } else { 0.0 }
}

/// Fold-back distortion.
///
/// While `|x|` exceeds the threshold it is mirrored around it:
/// `x ← sign(x) · (2t - |x|)`. Each pass shrinks `|x|` by at least the
/// overshoot, but very large ratios of `|x| / t` would need many passes, so
/// after [`MAX_FOLDS`] reflections the remainder is hard clipped.
#[inline]
pub fn foldback(x: f32, threshold: f32) -> f32 {
    let mut y = x;
    for _ in 0..MAX_FOLDS {
        if y.abs() <= threshold {
            return y;
        }
        y = y.signum() * (2.0 * threshold - y.abs());
    }
    hard_clip(y, threshold)
}

/// Bit crusher.
///
/// `round(x · 2^(N-1)) / 2^(N-1)` with `N = CRUSH_BITS`. The input is limited
/// to ±1 first so the quantizer spans the nominal sample range and never
/// exceeds it.
#[inline]
pub fn bit_crush(x: f32) -> f32 {
    roundf(hard_clip(x, 1.0) * CRUSH_STEPS) / CRUSH_STEPS
}

/// Square wave: `sign(x) · threshold`, with `sign(0) = 0`.
#[inline]
pub fn square(x: f32, threshold: f32) -> f32 {
    if x > 0.0 {
        threshold
    } else if x < 0.0 {
        -threshold
    } else {
        0.0
    }
}
