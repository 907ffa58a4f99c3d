//! Rapier2D world backing the decorative background.
//!
//! Screen coordinates: y grows downward, one unit is one CSS pixel.

use rapier2d::prelude::*;

/// Fixed timestep for the background simulation (60Hz).
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Downward pull on the cards, in pixels/s².
const GRAVITY_Y: f32 = 981.0;

/// Body, collider and solver state for the falling cards. Static bounds
/// are replaced as a group whenever the viewport changes.
pub struct BackgroundWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    bounds: Vec<ColliderHandle>,
    steps: u64,
}

impl std::fmt::Debug for BackgroundWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundWorld")
            .field("steps", &self.steps)
            .field("bodies", &self.bodies.len())
            .field("bounds", &self.bounds.len())
            .finish_non_exhaustive()
    }
}

impl Default for BackgroundWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundWorld {
    pub fn new() -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            params: IntegrationParameters {
                dt: PHYSICS_DT,
                ..Default::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            bounds: Vec::new(),
            steps: 0,
        }
    }

    /// Inserts a dynamic body with its single collider.
    pub fn insert_body(&mut self, body: RigidBody, collider: Collider) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Drops the previous static bounds and installs `colliders` instead.
    pub fn replace_bounds(&mut self, colliders: impl IntoIterator<Item = Collider>) {
        for handle in std::mem::take(&mut self.bounds) {
            self.colliders
                .remove(handle, &mut self.islands, &mut self.bodies, true);
        }
        self.bounds = colliders
            .into_iter()
            .map(|collider| self.colliders.insert(collider))
            .collect();
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Number of fixed steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn step(&mut self) {
        self.pipeline.step(
            Vector::new(0.0, GRAVITY_Y),
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            &(),
            &(),
        );
        self.steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling_box(world: &mut BackgroundWorld, x: f32, y: f32) -> RigidBodyHandle {
        world.insert_body(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(x, y))
                .build(),
            ColliderBuilder::cuboid(20.0, 10.0).build(),
        )
    }

    #[test]
    fn test_body_falls_down_screen() {
        let mut world = BackgroundWorld::new();
        let handle = falling_box(&mut world, 100.0, 100.0);
        for _ in 0..30 {
            world.step();
        }
        assert!(world.body(handle).unwrap().translation().y > 100.0);
        assert_eq!(world.steps(), 30);
    }

    #[test]
    fn test_replaced_bounds_stop_fall_at_new_floor() {
        let mut world = BackgroundWorld::new();
        let floor_at = |y: f32| {
            ColliderBuilder::cuboid(500.0, 10.0)
                .translation(Vector::new(0.0, y))
                .build()
        };
        // The first floor is replaced before anything reaches it.
        world.replace_bounds([floor_at(100.0)]);
        world.replace_bounds([floor_at(300.0)]);
        let handle = falling_box(&mut world, 0.0, 150.0);
        for _ in 0..600 {
            world.step();
        }
        let y = world.body(handle).unwrap().translation().y;
        assert!(y < 300.0, "body fell through the floor: {y}");
        assert!(y > 250.0, "body did not land: {y}");
    }
}
