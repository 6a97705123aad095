use super::{CelestialBody, Sun};

pub const SUN: Sun = Sun {
    visual_radius: 1.0,
    color: [1.0, 1.0, 0.0],
    name: "Sun",
};

/// Planets ordered from the innermost orbit outwards.
pub const CATALOG: [CelestialBody; 9] = [
    CelestialBody {
        orbit_radius: 1.5,
        visual_radius: 0.1,
        color: [0.5, 0.5, 0.5],
        name: "Mercury",
    },
    CelestialBody {
        orbit_radius: 2.2,
        visual_radius: 0.15,
        color: [0.9, 0.8, 0.4],
        name: "Venus",
    },
    CelestialBody {
        orbit_radius: 3.0,
        visual_radius: 0.18,
        color: [0.0, 0.5, 1.0],
        name: "Earth",
    },
    CelestialBody {
        orbit_radius: 4.0,
        visual_radius: 0.12,
        color: [1.0, 0.0, 0.0],
        name: "Mars",
    },
    CelestialBody {
        orbit_radius: 5.5,
        visual_radius: 0.4,
        color: [1.0, 0.6, 0.4],
        name: "Jupiter",
    },
    CelestialBody {
        orbit_radius: 7.0,
        visual_radius: 0.35,
        color: [1.0, 1.0, 0.6],
        name: "Saturn",
    },
    CelestialBody {
        orbit_radius: 8.5,
        visual_radius: 0.25,
        color: [0.4, 0.7, 1.0],
        name: "Uranus",
    },
    CelestialBody {
        orbit_radius: 10.0,
        visual_radius: 0.24,
        color: [0.0, 0.0, 1.0],
        name: "Neptune",
    },
    CelestialBody {
        orbit_radius: 11.5,
        visual_radius: 0.1,
        color: [0.7, 0.7, 0.7],
        name: "Pluto",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit_range(color: [f32; 3]) -> bool {
        color.iter().all(|c| (0.0..=1.0).contains(c))
    }

    #[test]
    fn nine_planets_and_one_sun() {
        assert_eq!(CATALOG.len(), 9);
        assert_eq!(SUN.name, "Sun");
        assert!(CATALOG.iter().all(|b| b.name != SUN.name));
    }

    #[test]
    fn planet_parameters_are_in_range() {
        for body in &CATALOG {
            assert!(body.orbit_radius > 0.0, "{}", body.name);
            assert!(body.visual_radius > 0.0, "{}", body.name);
            assert!(in_unit_range(body.color), "{}", body.name);
            assert!(!body.name.is_empty());
        }
        assert!(SUN.visual_radius > 0.0);
        assert!(in_unit_range(SUN.color));
    }

    #[test]
    fn orbits_increase_outwards() {
        for pair in CATALOG.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn planets_clear_the_sun() {
        assert!(CATALOG[0].orbit_radius - CATALOG[0].visual_radius > SUN.visual_radius);
    }

    #[test]
    fn label_sits_below_the_sphere() {
        let earth = CATALOG[2];
        let offset = earth.label_offset();
        assert_eq!(offset[0], 0.0);
        assert_eq!(offset[2], 0.0);
        assert!((offset[1] + 0.38).abs() < 1e-6);
        assert!((SUN.label_offset()[1] + 1.2).abs() < 1e-6);
    }
}
