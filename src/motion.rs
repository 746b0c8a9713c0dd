//! Animation descriptors. Components turn these into inline CSS; nothing
//! here knows about sections or scrolling state.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub fn offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn to_css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Delays the `index`-th item of a list by `index * step_ms` on top of the
/// base delay.
pub fn stagger(base: Transition, index: usize, step_ms: u32) -> Transition {
    let extra = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
    base.delayed(base.delay_ms.saturating_add(extra))
}

/// Entrance animation played when an element scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
    /// Stay revealed after leaving the viewport.
    pub once: bool,
}

impl Reveal {
    pub fn fade_up() -> Self {
        Self::from_pose(Pose::hidden().offset(0.0, 50.0))
    }

    pub fn fade_up_short() -> Self {
        Self {
            transition: Transition::new(500),
            ..Self::from_pose(Pose::hidden().offset(0.0, 20.0))
        }
    }

    pub fn fade_from_left() -> Self {
        Self::from_pose(Pose::hidden().offset(-50.0, 0.0))
    }

    pub fn fade_from_right() -> Self {
        Self::from_pose(Pose::hidden().offset(50.0, 0.0))
    }

    pub fn fade_in() -> Self {
        let reveal = Self::from_pose(Pose::hidden());
        Self {
            transition: Transition {
                easing: Easing::EaseInOut,
                ..reveal.transition
            },
            ..reveal
        }
    }

    fn from_pose(from: Pose) -> Self {
        Self {
            from,
            to: Pose::REST,
            transition: Transition::new(800),
            once: true,
        }
    }

    pub fn with_duration(self, duration_ms: u32) -> Self {
        Self {
            transition: Transition {
                duration_ms,
                ..self.transition
            },
            ..self
        }
    }

    pub fn with_delay(self, delay_ms: u32) -> Self {
        Self {
            transition: self.transition.delayed(delay_ms),
            ..self
        }
    }

    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        Self {
            transition: stagger(self.transition, index, step_ms),
            ..self
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let pose = if visible { self.to } else { self.from };
        format!("{} {}", pose.to_css(), self.transition.to_css())
    }
}

/// Hover response, exposed as CSS custom properties read by `.hoverable`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub scale: f64,
    pub rotate_deg: f64,
    pub shift_x: f64,
}

impl Hover {
    pub fn grow(scale: f64) -> Self {
        Self {
            scale,
            rotate_deg: 0.0,
            shift_x: 0.0,
        }
    }

    pub fn tilted(self, rotate_deg: f64) -> Self {
        Self { rotate_deg, ..self }
    }

    pub fn nudged(self, shift_x: f64) -> Self {
        Self { shift_x, ..self }
    }

    pub fn to_css_vars(&self) -> String {
        format!(
            "--hover-scale: {}; --hover-rotate: {}deg; --hover-x: {}px;",
            self.scale, self.rotate_deg, self.shift_x
        )
    }
}

/// Maps `value` from `input` onto `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// How far down the document the viewport is, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_style_switches_pose() {
        let reveal = Reveal::fade_up();
        assert_eq!(
            reveal.style(false),
            "opacity: 0; transform: translate(0px, 50px) scale(1) rotate(0deg); \
             transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"
        );
        assert!(reveal.style(true).starts_with("opacity: 1; transform: translate(0px, 0px)"));
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let base = Transition::new(800).delayed(300);
        assert_eq!(stagger(base, 0, 100).delay_ms, 300);
        assert_eq!(stagger(base, 3, 100).delay_ms, 600);
        assert_eq!(stagger(base, usize::MAX, 100).delay_ms, u32::MAX);
    }

    #[test]
    fn staggered_reveal_keeps_duration() {
        let reveal = Reveal::fade_up().with_duration(500).staggered(2, 200);
        assert_eq!(reveal.transition.duration_ms, 500);
        assert_eq!(reveal.transition.delay_ms, 400);
    }

    #[test]
    fn hover_vars() {
        let hover = Hover::grow(1.05).tilted(5.0).nudged(10.0);
        assert_eq!(
            hover.to_css_vars(),
            "--hover-scale: 1.05; --hover-rotate: 5deg; --hover-x: 10px;"
        );
    }

    #[test]
    fn interpolate_clamps_to_output() {
        assert_eq!(interpolate(0.15, (0.0, 0.3), (1.0, 0.0)), 0.5);
        assert_eq!(interpolate(0.9, (0.0, 0.3), (1.0, 0.0)), 0.0);
        assert_eq!(interpolate(-1.0, (0.0, 1.0), (0.0, 50.0)), 0.0);
        assert_eq!(interpolate(0.5, (0.0, 1.0), (0.0, 50.0)), 25.0);
        assert_eq!(interpolate(3.0, (2.0, 2.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn scroll_progress_on_short_documents() {
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(500.0, 1800.0, 800.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 1800.0, 800.0), 1.0);
    }
}
