//! Hero background: parallax shapes and pulsing neural lines.

use std::time::Duration;

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use neuralglass_core::{LineVisual, PulseSchedule, ShapeTransform};

use crate::context::{use_scroll, use_site_config};

const SHAPE_COUNT: usize = 4;
const LINE_COUNT: usize = 3;

/// Floating glass shapes that drift and rotate with the scroll offset.
#[component]
pub fn ParallaxShapes() -> Element {
    let config = use_site_config();
    let scroll = use_scroll();
    let offset = scroll.read().offset;

    rsx! {
        div { class: "floating-shapes",
            for index in 0..SHAPE_COUNT {
                div {
                    key: "{index}",
                    class: "shape shape-{index + 1}",
                    style: format!("transform: {};", ShapeTransform::parallax(offset, index, &config.parallax).css()),
                }
            }
        }
    }
}

/// Horizontal lines that flare in sequence on every pulse cycle.
///
/// Each cycle schedules its steps as independent tasks, so a slow cycle
/// may overlap the next one. All tasks end with the component.
#[component]
pub fn NeuralLines() -> Element {
    let config = use_site_config();
    let mut lines = use_signal(|| vec![LineVisual::default(); LINE_COUNT]);

    use_effect(move || {
        let schedule = PulseSchedule::new(config.pulse.clone());
        spawn(async move {
            loop {
                sleep(schedule.period()).await;
                for step in schedule.cycle(LINE_COUNT) {
                    spawn(async move {
                        if step.at > Duration::ZERO {
                            sleep(step.at).await;
                        }
                        if let Some(line) = lines.write().get_mut(step.line) {
                            *line = step.visual;
                        }
                    });
                }
            }
        });
    });

    rsx! {
        div { class: "neural-lines",
            for (index, visual) in lines.read().iter().enumerate() {
                div {
                    key: "{index}",
                    class: "neural-line",
                    style: visual.style(),
                }
            }
        }
    }
}
