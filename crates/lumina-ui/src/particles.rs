//! Decorative particle and confetti layers.
//!
//! Purely cosmetic: specs are rolled once when the layer mounts and rendered
//! as CSS-animated divs.

use dioxus::prelude::*;
use rand::Rng;

/// Confetti palette (success card).
pub const CONFETTI_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD"];

/// One drifting background particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Start position, percent of the viewport.
    pub x_pct: f32,
    pub y_pct: f32,
    /// Drift target, percent of the viewport.
    pub drift_x_pct: f32,
    pub drift_y_pct: f32,
    /// Diameter. Percent of the viewport for large orbs, pixels for motes.
    pub size: f32,
    pub duration_secs: f32,
}

impl ParticleSpec {
    /// Large blurred orb: 10-30% across, drifting for 20-50s.
    pub fn orb(rng: &mut impl Rng) -> Self {
        Self {
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
            drift_x_pct: rng.random_range(0.0..100.0),
            drift_y_pct: rng.random_range(0.0..100.0),
            size: rng.random_range(10.0..30.0),
            duration_secs: rng.random_range(20.0..50.0),
        }
    }

    /// Small bright mote: 4-12px, drifting for 15-40s.
    pub fn mote(rng: &mut impl Rng) -> Self {
        Self {
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
            drift_x_pct: rng.random_range(0.0..100.0),
            drift_y_pct: rng.random_range(0.0..100.0),
            size: rng.random_range(4.0..12.0),
            duration_secs: rng.random_range(15.0..40.0),
        }
    }
}

/// One falling confetti piece.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiSpec {
    pub color: &'static str,
    /// Horizontal start offset from center, px.
    pub start_x_px: f32,
    /// Horizontal landing offset from center, px.
    pub end_x_px: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
}

impl ConfettiSpec {
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            start_x_px: rng.random_range(-150.0..150.0),
            end_x_px: rng.random_range(-200.0..200.0),
            duration_secs: rng.random_range(3.0..6.0),
            delay_secs: rng.random_range(0.0..0.5),
        }
    }
}

/// Full-viewport decorative background: 10 orbs and 30 motes.
#[component]
pub fn ParticleBackground() -> Element {
    let specs = use_hook(|| {
        let mut rng = rand::rng();
        let orbs: Vec<ParticleSpec> = (0..10).map(|_| ParticleSpec::orb(&mut rng)).collect();
        let motes: Vec<ParticleSpec> = (0..30).map(|_| ParticleSpec::mote(&mut rng)).collect();
        (orbs, motes)
    });
    let (orbs, motes) = specs;

    rsx! {
        div { class: "particle-layer",
            for (i, p) in orbs.iter().enumerate() {
                {
                    let style = format!(
                        "left: {}%; top: {}%; width: {}%; height: {}%; --drift-x: {}vw; --drift-y: {}vh; animation-duration: {}s;",
                        p.x_pct,
                        p.y_pct,
                        p.size,
                        p.size,
                        p.drift_x_pct - p.x_pct,
                        p.drift_y_pct - p.y_pct,
                        p.duration_secs,
                    );
                    rsx! {
                        div { key: "orb-{i}", class: "particle-orb", style: "{style}" }
                    }
                }
            }
            for (i, p) in motes.iter().enumerate() {
                {
                    let style = format!(
                        "left: {}%; top: {}%; width: {}px; height: {}px; --drift-x: {}vw; --drift-y: {}vh; animation-duration: {}s;",
                        p.x_pct,
                        p.y_pct,
                        p.size,
                        p.size,
                        p.drift_x_pct - p.x_pct,
                        p.drift_y_pct - p.y_pct,
                        p.duration_secs,
                    );
                    rsx! {
                        span { key: "mote-{i}", class: "particle-mote", style: "{style}" }
                    }
                }
            }
            div { class: "particle-overlay" }
        }
    }
}

/// One-shot confetti burst for the success card. 30 pieces falling from the
/// card's top center.
#[component]
pub fn ConfettiBurst() -> Element {
    let pieces = use_hook(|| {
        let mut rng = rand::rng();
        (0..30).map(|_| ConfettiSpec::roll(&mut rng)).collect::<Vec<_>>()
    });

    rsx! {
        div { class: "confetti-layer",
            for (i, c) in pieces.iter().enumerate() {
                {
                    let style = format!(
                        "background-color: {}; --start-x: {}px; --end-x: {}px; animation-duration: {}s; animation-delay: {}s;",
                        c.color, c.start_x_px, c.end_x_px, c.duration_secs, c.delay_secs,
                    );
                    rsx! {
                        span { key: "confetti-{i}", class: "confetti-piece", style: "{style}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_orb_spec_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = ParticleSpec::orb(&mut rng);
            assert!((0.0..100.0).contains(&p.x_pct));
            assert!((0.0..100.0).contains(&p.y_pct));
            assert!((10.0..30.0).contains(&p.size));
            assert!((20.0..50.0).contains(&p.duration_secs));
        }
    }

    #[test]
    fn test_mote_spec_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = ParticleSpec::mote(&mut rng);
            assert!((4.0..12.0).contains(&p.size));
            assert!((15.0..40.0).contains(&p.duration_secs));
        }
    }

    #[test]
    fn test_confetti_spec_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = ConfettiSpec::roll(&mut rng);
            assert!(CONFETTI_COLORS.contains(&c.color));
            assert!((-150.0..150.0).contains(&c.start_x_px));
            assert!((-200.0..200.0).contains(&c.end_x_px));
            assert!((3.0..6.0).contains(&c.duration_secs));
            assert!((0.0..0.5).contains(&c.delay_secs));
        }
    }
}
