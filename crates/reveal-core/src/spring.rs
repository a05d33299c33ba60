//! Mass-spring-damper used to give scroll-driven values inertia.

const SUBSTEP_SEC: f32 = 1.0 / 240.0;
const REST_POSITION_EPS: f32 = 1e-3;
const REST_VELOCITY_EPS: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// ζ = c / (2·√(k·m)); values >= 1 never oscillate.
    pub fn damping_ratio(&self) -> f32 {
        let km = (self.stiffness * self.mass).max(f32::EPSILON);
        self.damping / (2.0 * km.sqrt())
    }

    pub fn is_overdamped_or_critical(&self) -> bool {
        self.damping_ratio() >= 1.0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    initialized: bool,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            initialized: false,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Snap to `value` with zero velocity.
    pub fn reset(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
        self.initialized = true;
    }

    pub fn is_at_rest(&self, target: f32) -> bool {
        (target - self.position).abs() < REST_POSITION_EPS && self.velocity.abs() < REST_VELOCITY_EPS
    }

    /// Advance toward `target` by `dt_sec`, returning the new position.
    ///
    /// The first call snaps to the target. Integration is semi-implicit Euler
    /// in fixed substeps so stiff configs stay stable at low frame rates.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !target.is_finite() {
            return self.position;
        }
        if !self.initialized {
            self.reset(target);
            return self.position;
        }
        let mut remaining = dt_sec.max(0.0);
        let k = self.config.stiffness;
        let c = self.config.damping;
        let inv_m = 1.0 / self.config.mass.max(f32::EPSILON);
        // Integrate the displacement, not the absolute position: near large
        // targets a substep's move is below one ulp of the position.
        let mut x = self.position - target;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SEC);
            let accel = (-k * x - c * self.velocity) * inv_m;
            self.velocity += accel * h;
            x += self.velocity * h;
            remaining -= h;
        }
        self.position = target + x;
        if self.is_at_rest(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }
}
