//! Parameters for the decorative background and the parallax sections.
//!
//! The browser script does the drawing; the values here are rendered into the
//! page as JSON so both sides agree on the same model.

use serde::Serialize;

/// Per-frame easing of the background `chaos` parameter towards a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaosTween {
    /// Value while the pointer is elsewhere
    pub rest: f64,
    /// Value while the download button is hovered
    pub hover: f64,
    /// Fraction of the remaining distance covered each frame
    pub factor: f64,
    /// Distance under which the value snaps to the target and the loop stops
    pub tolerance: f64,
}

impl Default for ChaosTween {
    fn default() -> Self {
        Self {
            rest: 1.5,
            hover: 0.2,
            factor: 0.1,
            tolerance: 0.01,
        }
    }
}

impl ChaosTween {
    /// Advance one frame. Returns the new value and whether another frame is needed.
    pub fn step(&self, current: f64, target: f64) -> (f64, bool) {
        if (target - current).abs() > self.tolerance {
            (lerp(current, target, self.factor), true)
        } else {
            (target, false)
        }
    }

    /// Number of frames until `current` settles on `target`.
    pub fn frames_to_settle(&self, mut current: f64, target: f64) -> usize {
        let mut frames = 0;
        loop {
            let (next, more) = self.step(current, target);
            current = next;
            frames += 1;
            if !more {
                return frames;
            }
        }
    }
}

/// Concentric noisy rings drawn behind the hero section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkSketch {
    pub rings: u32,
    pub rings_mobile: u32,
    /// Viewport width below which `rings_mobile` is used
    pub mobile_breakpoint: u32,
    pub dim_init: f64,
    pub dim_delta: f64,
    pub chaos_init: f64,
    pub chaos_delta: f64,
    pub chaos_mag: f64,
    pub color: String,
    pub background_color: String,
}

impl Default for TrunkSketch {
    fn default() -> Self {
        Self {
            rings: 55,
            rings_mobile: 35,
            mobile_breakpoint: 768,
            dim_init: 200.0,
            dim_delta: 4.0,
            chaos_init: 0.2,
            chaos_delta: 0.12,
            chaos_mag: 20.0,
            color: color_hex(0x3366bf),
            background_color: color_hex(0xffffff),
        }
    }
}

impl TrunkSketch {
    pub fn ring_count(&self, viewport_width: u32) -> u32 {
        if viewport_width < self.mobile_breakpoint {
            self.rings_mobile
        } else {
            self.rings
        }
    }

    /// Noise sampling radius for ring `i`
    pub fn noise_dim(&self, ring: u32) -> f64 {
        self.chaos_delta * f64::from(ring) + self.chaos_init
    }

    /// Radius of ring `i` for a noise sample in `[0, 1]`
    pub fn radius(&self, ring: u32, chaos: f64, noise: f64) -> f64 {
        chaos * self.chaos_mag * noise + (self.dim_delta * f64::from(ring) + self.dim_init)
    }
}

/// Vertical drift of a section background while the section scrolls by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallax {
    pub offset: f64,
    pub background_opacity: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            offset: 80.0,
            background_opacity: 0.6,
        }
    }
}

impl Parallax {
    /// `progress` is 0 when the section enters at the bottom and 1 when it
    /// leaves at the top.
    pub fn translate_y(&self, progress: f64, reduced_motion: bool) -> f64 {
        if reduced_motion {
            return 0.0;
        }
        lerp(-self.offset, self.offset, progress.clamp(0.0, 1.0))
    }
}

/// Everything the browser script needs, serialized into the page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSettings {
    pub chaos: ChaosTween,
    pub trunk: TrunkSketch,
    pub parallax: Parallax,
    /// How long the copy button shows its confirmation, in milliseconds
    pub copy_feedback_ms: u64,
}

impl AnimationSettings {
    pub fn new() -> Self {
        Self {
            copy_feedback_ms: 2000,
            ..Self::default()
        }
    }
}

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

fn color_hex(color: u32) -> String {
    format!("#{:06x}", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_moves_a_tenth_of_the_way() {
        let tween = ChaosTween::default();
        let (next, more) = tween.step(1.5, 0.2);
        assert!(more);
        assert!((next - 1.37).abs() < 1e-9);
    }

    #[test]
    fn tween_snaps_inside_tolerance() {
        let tween = ChaosTween::default();
        assert_eq!(tween.step(0.205, 0.2), (0.2, false));
        assert_eq!(tween.step(0.2, 0.2), (0.2, false));
    }

    #[test]
    fn tween_settles_on_hover_and_back() {
        let tween = ChaosTween::default();
        let to_hover = tween.frames_to_settle(tween.rest, tween.hover);
        let to_rest = tween.frames_to_settle(tween.hover, tween.rest);
        // 1.3 * 0.9^n <= 0.01 after 47 steps, plus the snapping frame
        assert_eq!(to_hover, 48);
        assert_eq!(to_rest, to_hover);
    }

    #[test]
    fn trunk_uses_fewer_rings_on_small_screens() {
        let sketch = TrunkSketch::default();
        assert_eq!(sketch.ring_count(375), 35);
        assert_eq!(sketch.ring_count(768), 55);
        assert_eq!(sketch.ring_count(1440), 55);
    }

    #[test]
    fn trunk_radius_grows_outward() {
        let sketch = TrunkSketch::default();
        assert_eq!(sketch.radius(0, 0.0, 0.7), 200.0);
        assert_eq!(sketch.radius(10, 1.5, 0.5), 1.5 * 20.0 * 0.5 + 240.0);
        assert!((sketch.noise_dim(5) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn trunk_colors_are_css_hex() {
        let sketch = TrunkSketch::default();
        assert_eq!(sketch.color, "#3366bf");
        assert_eq!(sketch.background_color, "#ffffff");
    }

    #[test]
    fn parallax_spans_offset_range() {
        let parallax = Parallax::default();
        assert_eq!(parallax.translate_y(0.0, false), -80.0);
        assert_eq!(parallax.translate_y(0.5, false), 0.0);
        assert_eq!(parallax.translate_y(1.0, false), 80.0);
        assert_eq!(parallax.translate_y(3.0, false), 80.0);
        assert_eq!(parallax.translate_y(0.0, true), 0.0);
        assert_eq!(parallax.translate_y(1.0, true), 0.0);
    }

    #[test]
    fn settings_serialize_camel_case() {
        let json = serde_json::to_value(AnimationSettings::new()).unwrap();
        assert_eq!(json["chaos"]["rest"], 1.5);
        assert_eq!(json["trunk"]["ringsMobile"], 35);
        assert_eq!(json["parallax"]["offset"], 80.0);
        assert_eq!(json["copyFeedbackMs"], 2000);
    }
}
