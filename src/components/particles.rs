//! Rising background particles.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use neuralglass_core::ParticleField;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::context::use_site_config;
use crate::dom;

/// Spawns one particle per interval; each removes itself when its rise
/// animation ends.
#[component]
pub fn ParticleLayer() -> Element {
    let config = use_site_config();
    let mut field = use_signal(|| {
        ParticleField::new(SmallRng::seed_from_u64(dom::random_seed()), config.particles.clone())
    });

    use_effect(move || {
        let interval = field.peek().spawn_interval();
        spawn(async move {
            loop {
                sleep(interval).await;
                field.write().spawn();
            }
        });
    });

    let particles: Vec<(u64, String)> = field
        .read()
        .iter()
        .map(|particle| (particle.id, particle.style()))
        .collect();

    rsx! {
        div { class: "particle-layer",
            for (id, style) in particles {
                div {
                    key: "{id}",
                    class: "particle",
                    style: "{style}",
                    onanimationend: move |_| {
                        field.write().finish(id);
                    },
                }
            }
        }
    }
}
