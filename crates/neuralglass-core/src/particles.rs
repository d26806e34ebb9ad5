//! Particle emitter
//!
//! Particles are spawned on a fixed interval with randomized attributes and
//! live until their rise-and-fade animation finishes. The random source is
//! injected so trajectories are reproducible under a seeded generator.

use std::time::Duration;

use rand::Rng;

use crate::config::ParticleConfig;

/// Color used if the configured palette is empty
const FALLBACK_COLOR: &str = "#ffffff";

/// Attributes of one spawned particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub id: u64,
    pub size_px: f64,
    pub color: String,
    /// Horizontal spawn position, percent of viewport width
    pub left_pct: f64,
    pub duration: Duration,
    /// Horizontal drift at the end of the rise
    pub drift_px: f64,
}

impl ParticleSpec {
    /// Inline style: a glowing dot at the bottom of the viewport running the
    /// `particle-rise` keyframes (defined in the global stylesheet).
    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; background: {color}; \
             border-radius: 50%; left: {left}%; top: 100vh; pointer-events: none; z-index: -1; \
             box-shadow: 0 0 10px {color}; --drift: {drift}px; \
             animation: particle-rise {duration}ms ease-out forwards;",
            size = self.size_px,
            color = self.color,
            left = self.left_pct,
            drift = self.drift_px,
            duration = self.duration.as_millis(),
        )
    }
}

/// Draws particle attributes from an injected random source.
pub struct ParticleEmitter<R: Rng> {
    rng: R,
    config: ParticleConfig,
    next_id: u64,
}

impl<R: Rng> ParticleEmitter<R> {
    pub fn new(rng: R, config: ParticleConfig) -> Self {
        Self {
            rng,
            config,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Produce the next particle.
    pub fn emit(&mut self) -> ParticleSpec {
        let id = self.next_id;
        self.next_id += 1;

        let size_px = sample(&mut self.rng, self.config.min_size_px, self.config.max_size_px);
        let color = if self.config.palette.is_empty() {
            FALLBACK_COLOR.to_string()
        } else {
            let index = self.rng.random_range(0..self.config.palette.len());
            self.config.palette[index].clone()
        };
        let left_pct = sample(&mut self.rng, 0.0, 100.0);
        let duration_ms = sample(
            &mut self.rng,
            self.config.min_duration_ms as f64,
            self.config.max_duration_ms as f64,
        );
        let drift_px = sample(&mut self.rng, -self.config.max_drift_px, self.config.max_drift_px);

        ParticleSpec {
            id,
            size_px,
            color,
            left_pct,
            duration: Duration::from_millis(duration_ms as u64),
            drift_px,
        }
    }
}

/// Uniform sample from `[low, high)`, or `low` for an empty range.
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// The set of live particles on the page.
///
/// A particle enters on [`spawn`](Self::spawn) and leaves only through
/// [`finish`](Self::finish), called when its animation ends.
pub struct ParticleField<R: Rng> {
    emitter: ParticleEmitter<R>,
    live: Vec<ParticleSpec>,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(rng: R, config: ParticleConfig) -> Self {
        Self {
            emitter: ParticleEmitter::new(rng, config),
            live: Vec::new(),
        }
    }

    pub fn spawn_interval(&self) -> Duration {
        self.emitter.config().spawn_interval()
    }

    /// Emit a particle and add it to the live set; returns a copy of it.
    pub fn spawn(&mut self) -> ParticleSpec {
        let particle = self.emitter.emit();
        tracing::trace!(id = particle.id, duration_ms = particle.duration.as_millis() as u64, "particle spawned");
        self.live.push(particle.clone());
        particle
    }

    /// Remove a particle whose animation has finished. Unknown ids are ignored.
    pub fn finish(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|particle| particle.id != id);
        before != self.live.len()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleSpec> {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn emitter(seed: u64) -> ParticleEmitter<SmallRng> {
        ParticleEmitter::new(SmallRng::seed_from_u64(seed), ParticleConfig::default())
    }

    #[test]
    fn attributes_stay_in_range() {
        let config = ParticleConfig::default();
        let mut emitter = emitter(7);
        for _ in 0..500 {
            let p = emitter.emit();
            assert!(p.size_px >= 1.0 && p.size_px < 5.0);
            assert!(config.palette.contains(&p.color));
            assert!(p.left_pct >= 0.0 && p.left_pct < 100.0);
            assert!(p.duration >= Duration::from_millis(2000));
            assert!(p.duration < Duration::from_millis(5000));
            assert!(p.drift_px >= -100.0 && p.drift_px < 100.0);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = emitter(42);
        let mut b = emitter(42);
        for _ in 0..10 {
            assert_eq!(a.emit(), b.emit());
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut emitter = emitter(1);
        let first = emitter.emit();
        let second = emitter.emit();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn empty_palette_falls_back() {
        let config = ParticleConfig {
            palette: Vec::new(),
            ..ParticleConfig::default()
        };
        let mut emitter = ParticleEmitter::new(SmallRng::seed_from_u64(3), config);
        assert_eq!(emitter.emit().color, FALLBACK_COLOR);
    }

    #[test]
    fn field_spawn_and_finish() {
        let mut field = ParticleField::new(SmallRng::seed_from_u64(9), ParticleConfig::default());
        let id = field.spawn().id;
        let latest = field.spawn();
        assert_eq!(field.len(), 2);
        assert_eq!(field.iter().last(), Some(&latest));

        assert!(field.finish(id));
        assert_eq!(field.len(), 1);
        // Finishing twice is harmless
        assert!(!field.finish(id));
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn style_carries_animation() {
        let particle = ParticleSpec {
            id: 0,
            size_px: 2.5,
            color: "#ff0080".to_string(),
            left_pct: 40.0,
            duration: Duration::from_millis(3000),
            drift_px: -20.0,
        };
        let style = particle.style();
        assert!(style.contains("width: 2.5px"));
        assert!(style.contains("box-shadow: 0 0 10px #ff0080"));
        assert!(style.contains("--drift: -20px"));
        assert!(style.contains("particle-rise 3000ms ease-out"));
    }
}
