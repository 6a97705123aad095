/// Degrees added per timer tick.
pub const ANGLE_STEP: u32 = 1;
pub const FULL_TURN: u32 = 360;
/// Orbital phase between neighbouring catalog entries when orbits are animated.
pub const ORBIT_PHASE_STEP: f32 = 40.0;

/// Tick-driven animation clock. `angle` stays in `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationState {
    angle: u32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.angle = (self.angle + ANGLE_STEP) % FULL_TURN;
    }

    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Position on its orbit of the catalog entry at `index`, in degrees.
    pub fn orbit_angle(&self, index: usize) -> f32 {
        (self.angle as f32 + index as f32 * ORBIT_PHASE_STEP) % FULL_TURN as f32
    }
}
