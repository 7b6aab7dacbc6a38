// Celebratory burst particles drawn on the overlay canvas. Pure bookkeeping
// here; the component owns the canvas and the frame loop.

/// Downward acceleration in canvas pixels per second squared.
pub const GRAVITY_PX_S2: f64 = 900.0;
/// Horizontal velocity damping per second.
pub const DRAG_PER_S: f64 = 0.35;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: &'static str,
    /// Remaining life in seconds; retired at zero.
    pub life: f64,
}

/// Spawn a burst from a point 60% down the canvas, fanned upward across
/// `spread_deg`.
pub fn burst(
    count: usize,
    spread_deg: f64,
    palette: &'static [&'static str],
    width: f64,
    height: f64,
    mut rng: impl FnMut() -> f64,
) -> Vec<ConfettiParticle> {
    let origin_x = width * 0.5;
    let origin_y = height * 0.6;
    let half_spread = spread_deg.to_radians() * 0.5;
    (0..count)
        .map(|_| {
            // Angle around straight up, jittered within the fan.
            let angle = -std::f64::consts::FRAC_PI_2 + (rng() * 2.0 - 1.0) * half_spread;
            let speed = 300.0 + rng() * 450.0;
            let pick = ((rng() * palette.len() as f64) as usize).min(palette.len() - 1);
            ConfettiParticle {
                x: origin_x + (rng() * 2.0 - 1.0) * 12.0,
                y: origin_y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: 4.0 + rng() * 5.0,
                color: palette[pick],
                life: 1.4 + rng() * 0.8,
            }
        })
        .collect()
}

/// Advance all particles by `dt` seconds and drop the expired ones.
pub fn step(particles: &mut Vec<ConfettiParticle>, dt: f64) {
    for p in particles.iter_mut() {
        p.x += p.vx * dt;
        p.y += p.vy * dt;
        p.vy += GRAVITY_PX_S2 * dt;
        p.vx *= 1.0 - (DRAG_PER_S * dt).min(1.0);
        p.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &[&str] = &["#3b82f6", "#1d4ed8", "#60a5fa", "#ffffff"];

    fn counter_rng() -> impl FnMut() -> f64 {
        let mut n = 0u32;
        move || {
            n = (n * 31 + 7) % 97;
            n as f64 / 97.0
        }
    }

    #[test]
    fn burst_spawns_count_particles_from_the_palette() {
        let particles = burst(150, 70.0, PALETTE, 800.0, 600.0, counter_rng());
        assert_eq!(particles.len(), 150);
        for p in &particles {
            assert!(PALETTE.contains(&p.color));
            assert_eq!(p.y, 600.0 * 0.6);
        }
    }

    #[test]
    fn burst_launches_upward_within_the_fan() {
        // 100 degrees of spread keeps every launch angle above horizontal.
        let particles = burst(200, 100.0, PALETTE, 800.0, 600.0, counter_rng());
        assert!(particles.iter().all(|p| p.vy < 0.0));
    }

    #[test]
    fn gravity_pulls_particles_back_down() {
        let mut particles = burst(10, 70.0, PALETTE, 800.0, 600.0, counter_rng());
        let initial_vy: Vec<f64> = particles.iter().map(|p| p.vy).collect();
        step(&mut particles, 0.1);
        for (p, before) in particles.iter().zip(initial_vy) {
            assert!(p.vy > before);
        }
    }

    #[test]
    fn expired_particles_are_retired() {
        let mut particles = burst(50, 70.0, PALETTE, 800.0, 600.0, counter_rng());
        step(&mut particles, 10.0);
        assert!(particles.is_empty());
    }
}
