//! Keyframes and timing math for the animated hero background.
//!
//! The background walks through [`KEYFRAMES`] over one cycle, then walks back
//! over the next one, forever. Each segment between two keyframes is eased
//! in and out. Everything here is a pure function of elapsed time; the
//! component only has to feed it a clock.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub angle_deg: u16,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    const fn diagonal(from: u32, to: u32) -> Self {
        Self {
            angle_deg: 45,
            from: Rgb::hex(from),
            to: Rgb::hex(to),
        }
    }

    pub fn lerp(&self, other: &Gradient, t: f64) -> Gradient {
        Gradient {
            angle_deg: self.angle_deg,
            from: self.from.lerp(other.from, t),
            to: self.to.lerp(other.to, t),
        }
    }

    /// CSS `background` value, e.g. `linear-gradient(45deg, #1a0a2e, #0d0d2c)`.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            self.angle_deg,
            self.from.css(),
            self.to.css()
        )
    }
}

pub const KEYFRAMES: [Gradient; 5] = [
    Gradient::diagonal(0x1a0a2e, 0x0d0d2c),
    Gradient::diagonal(0x2c0d3e, 0x1a0a2e),
    Gradient::diagonal(0x3e0d2c, 0x2c0d3e),
    Gradient::diagonal(0x2c0d1a, 0x3e0d2c),
    Gradient::diagonal(0x1a0a2e, 0x0d0d2c),
];

/// An endless forward/backward sweep through a keyframe list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCycle {
    keyframes: &'static [Gradient],
    cycle_ms: f64,
}

impl GradientCycle {
    /// Sweep the hero keyframes, `cycle_ms` per direction.
    pub fn new(cycle_ms: u64) -> Self {
        Self {
            keyframes: &KEYFRAMES,
            cycle_ms: cycle_ms.max(1) as f64,
        }
    }

    /// Position along the keyframe list in `[0, 1]`, bouncing at both ends.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let phase = elapsed % (2.0 * self.cycle_ms);
        if phase <= self.cycle_ms {
            phase / self.cycle_ms
        } else {
            (2.0 * self.cycle_ms - phase) / self.cycle_ms
        }
    }

    /// Interpolated gradient at `elapsed_ms` since the animation started.
    pub fn frame_at(&self, elapsed_ms: f64) -> Gradient {
        let segments = self.keyframes.len() - 1;
        if segments == 0 {
            return self.keyframes[0];
        }
        let scaled = self.progress_at(elapsed_ms) * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = ease_in_out(scaled - index as f64);
        self.keyframes[index].lerp(&self.keyframes[index + 1], local)
    }
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
