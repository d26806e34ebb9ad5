//! Ambient animation: parallax shapes and the neural-line pulse
//!
//! Parallax is a pure function of the scroll offset and the shape's index.
//! The pulse is described as a schedule of timed steps per cycle; the host
//! runs each step on its own timer, so overlapping cycles simply interleave.

use std::time::Duration;

use crate::config::{ParallaxConfig, PulseConfig};

/// Transform applied to one decorative shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeTransform {
    pub translate_y_px: f64,
    pub rotate_deg: f64,
}

impl ShapeTransform {
    /// Transform for the shape at `index` (0-based) at scroll `offset`.
    pub fn parallax(offset: f64, index: usize, config: &ParallaxConfig) -> Self {
        let speed = (index as f64 + 1.0) * config.speed_step;
        Self {
            translate_y_px: offset * speed,
            rotate_deg: offset * config.rotation_per_px,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "translateY({}px) rotate({}deg)",
            self.translate_y_px, self.rotate_deg
        )
    }
}

/// Visual state of a neural line
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineVisual {
    Peak,
    #[default]
    Rest,
}

impl LineVisual {
    pub fn opacity(&self) -> f64 {
        match self {
            LineVisual::Peak => 1.0,
            LineVisual::Rest => 0.2,
        }
    }

    pub fn scale_x(&self) -> f64 {
        match self {
            LineVisual::Peak => 1.2,
            LineVisual::Rest => 0.5,
        }
    }

    /// Inline style for the line element
    pub fn style(&self) -> String {
        format!("opacity: {}; transform: scaleX({});", self.opacity(), self.scale_x())
    }
}

/// One timed change within a pulse cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseStep {
    /// Delay from the start of the cycle
    pub at: Duration,
    pub line: usize,
    pub visual: LineVisual,
}

/// Builds the per-cycle schedule of line changes.
#[derive(Debug, Clone, Default)]
pub struct PulseSchedule {
    config: PulseConfig,
}

impl PulseSchedule {
    pub fn new(config: PulseConfig) -> Self {
        Self { config }
    }

    pub fn period(&self) -> Duration {
        self.config.period()
    }

    /// Steps for one cycle over `line_count` lines, ordered by time.
    ///
    /// Line `i` peaks at `i * stagger` and rests `hold` later.
    pub fn cycle(&self, line_count: usize) -> Vec<PulseStep> {
        let stagger = Duration::from_millis(self.config.stagger_ms);
        let hold = Duration::from_millis(self.config.hold_ms);

        let mut steps: Vec<PulseStep> = (0..line_count)
            .flat_map(|line| {
                let peak_at = stagger * line as u32;
                [
                    PulseStep {
                        at: peak_at,
                        line,
                        visual: LineVisual::Peak,
                    },
                    PulseStep {
                        at: peak_at + hold,
                        line,
                        visual: LineVisual::Rest,
                    },
                ]
            })
            .collect();
        steps.sort_by_key(|step| (step.at, step.line));
        steps
    }
}
