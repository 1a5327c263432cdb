use crate::r#match::{Bounds, CollisionResolver, Entity, EntityId, EntityTag, EventCollection, pair_mut};
use itertools::Itertools;

const BOUNDARY_BOUNCE: f32 = 0.5;
const BALL_AIR_RESISTANCE: f32 = 0.99;

/// Pairwise broad phase over registered ids, iterated in registration order.
#[derive(Debug, Default)]
pub struct CollisionSystem {
    members: Vec<EntityId>,
    pairs: Vec<(EntityId, EntityId)>,
}

impl CollisionSystem {
    pub fn new() -> Self {
        CollisionSystem {
            members: Vec::new(),
            pairs: Vec::new(),
        }
    }

    pub fn add(&mut self, id: EntityId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn remove(&mut self, id: EntityId) {
        self.members.retain(|member| *member != id);
    }

    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    /// Pairs that intersected during the last detection pass.
    pub fn collision_pairs(&self) -> &[(EntityId, EntityId)] {
        &self.pairs
    }

    pub fn detect_and_resolve(&mut self, entities: &mut [Entity], events: &mut EventCollection) {
        self.pairs.clear();

        for (a, b) in self.members.iter().tuple_combinations() {
            let Some((first, second)) = pair_mut(entities, a.0, b.0) else {
                continue;
            };

            if !first.active || !second.active || !first.intersects(second) {
                continue;
            }

            self.pairs.push((*a, *b));
            CollisionResolver::resolve(first, second, events);
        }
    }

    pub fn apply_boundary_constraints(&self, entities: &mut [Entity], world: Bounds) {
        for id in &self.members {
            let Some(entity) = entities.get_mut(id.0) else {
                continue;
            };

            if !entity.active {
                continue;
            }

            Self::keep_in_bounds(entity, world);

            if entity.tag() == EntityTag::Ball {
                entity.velocity *= BALL_AIR_RESISTANCE;
            }
        }
    }

    /// Clamps the box inside `world`; a clamped axis bounces back inwards at half speed.
    pub fn keep_in_bounds(entity: &mut Entity, world: Bounds) {
        let half = entity.half_extents();

        if entity.position.x - half.x < world.left {
            entity.position.x = world.left + half.x;
            entity.velocity.x = entity.velocity.x.abs() * BOUNDARY_BOUNCE;
        } else if entity.position.x + half.x > world.right {
            entity.position.x = world.right - half.x;
            entity.velocity.x = -entity.velocity.x.abs() * BOUNDARY_BOUNCE;
        }

        if entity.position.y - half.y < world.top {
            entity.position.y = world.top + half.y;
            entity.velocity.y = entity.velocity.y.abs() * BOUNDARY_BOUNCE;
        } else if entity.position.y + half.y > world.bottom {
            entity.position.y = world.bottom - half.y;
            entity.velocity.y = -entity.velocity.y.abs() * BOUNDARY_BOUNCE;
        }
    }
}
