use super::constants::{PARTICLE_COUNT, PARTICLE_EASE, ROTATION_SPEED, SCALE_EASE};
use super::gesture::{GestureInterpreter, GestureUpdate, Landmark, TrackingStatus};
use super::particles::ParticleBuffer;
use super::shapes::{Shape, ShapeError, ShapeKind, ShapeLibrary};
use glam::{Mat4, Quat, Vec3};
use instant::Instant;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct SessionParams {
    pub particle_count: usize,
    /// Fixed seed for reproducible clouds; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub initial_shape: ShapeKind,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: None,
            initial_shape: ShapeKind::Heart,
        }
    }
}

/// Displayed uniform scale eased toward a gesture-driven target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    pub target: f32,
    pub current: f32,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            target: 1.0,
            current: 1.0,
        }
    }
}

impl ScaleState {
    #[inline]
    pub fn ease(&mut self, factor: f32) {
        self.current += (self.target - self.current) * factor;
    }
}

/// All state of one running particle demo: shapes, live particles, gesture
/// signals and the drift angle.
pub struct Session {
    shapes: ShapeLibrary,
    particles: ParticleBuffer,
    target: ShapeKind,
    scale: ScaleState,
    rotation_y: f32,
    gestures: GestureInterpreter,
    tracking: TrackingStatus,
    rng: StdRng,
    frames: u64,
}

impl Session {
    pub fn new(params: SessionParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let shapes = ShapeLibrary::generate(params.particle_count, &mut rng);
        log::info!(
            "[shape] generated {} shapes x {} points, target={}",
            ShapeKind::ALL.len(),
            shapes.count(),
            params.initial_shape
        );
        Self {
            particles: ParticleBuffer::new(shapes.count()),
            shapes,
            target: params.initial_shape,
            scale: ScaleState::default(),
            rotation_y: 0.0,
            gestures: GestureInterpreter::new(),
            tracking: TrackingStatus::Initializing,
            rng,
            frames: 0,
        }
    }

    pub fn shapes(&self) -> &ShapeLibrary {
        &self.shapes
    }

    pub fn particles(&self) -> &ParticleBuffer {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleBuffer {
        &mut self.particles
    }

    pub fn target(&self) -> ShapeKind {
        self.target
    }

    pub fn target_shape(&self) -> &Shape {
        self.shapes.get(self.target)
    }

    pub fn scale(&self) -> ScaleState {
        self.scale
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tracking(&self) -> &TrackingStatus {
        &self.tracking
    }

    pub fn set_tracking(&mut self, status: TrackingStatus) {
        if self.tracking != status {
            log::info!("[tracking] {}", status);
            self.tracking = status;
        }
    }

    /// Retarget the cloud; easing continues from the current positions.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.target = kind;
    }

    pub fn set_shape_by_name(&mut self, name: &str) -> Result<ShapeKind, ShapeError> {
        let kind: ShapeKind = name.parse()?;
        self.set_shape(kind);
        Ok(kind)
    }

    pub fn set_scale_target(&mut self, target: f32) {
        self.scale.target = target;
    }

    /// Feed one hand-tracking callback into the session.
    pub fn on_hand_results(&mut self, hands: &[Vec<Landmark>], now: Instant) -> GestureUpdate {
        let update = self.gestures.interpret(hands, now);
        if let Some(target) = update.scale_target {
            self.scale.target = target;
        }
        if update.pinched {
            let next = ShapeKind::random(&mut self.rng);
            log::info!("[gesture] pinch: {} -> {}", self.target, next);
            self.set_shape(next);
        }
        update
    }

    /// Advance the animation by one display frame.
    pub fn step(&mut self) {
        self.scale.ease(SCALE_EASE);
        let target = self.shapes.get(self.target);
        self.particles.ease_toward(target, PARTICLE_EASE);
        self.rotation_y += ROTATION_SPEED;
        self.frames += 1;
    }

    /// Object transform: uniform scale, then yaw about the world Y axis.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale.current),
            Quat::from_rotation_y(self.rotation_y),
            Vec3::ZERO,
        )
    }
}
