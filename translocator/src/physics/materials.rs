use std::collections::HashMap;

use rapier3d::prelude::*;

use crate::config::ContactCoefficients;

/// Physics material tag, stored in a collider's `user_data`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl MaterialId {
    pub const DEFAULT: MaterialId = MaterialId(0);
    pub const GROUND: MaterialId = MaterialId(1);
    pub const TRANSLOCATOR: MaterialId = MaterialId(2);

    pub fn of(collider: &Collider) -> MaterialId {
        MaterialId(collider.user_data as u32)
    }

    pub fn user_data(&self) -> u128 {
        self.0 as u128
    }
}

/// Coefficients per unordered material pair, applied to solver contacts as they are
/// generated. Pairs without an entry keep rapier's combined collider values.
#[derive(Clone, Debug, Default)]
pub struct ContactMaterialTable {
    pairs: HashMap<(MaterialId, MaterialId), ContactCoefficients>,
}

fn pair_key(a: MaterialId, b: MaterialId) -> (MaterialId, MaterialId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl ContactMaterialTable {
    pub fn new() -> ContactMaterialTable {
        ContactMaterialTable::default()
    }

    pub fn register(&mut self, a: MaterialId, b: MaterialId, coefficients: ContactCoefficients) {
        self.pairs.insert(pair_key(a, b), coefficients);
    }

    pub fn get(&self, a: MaterialId, b: MaterialId) -> Option<ContactCoefficients> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PhysicsHooks for ContactMaterialTable {
    fn modify_solver_contacts(&self, context: &mut ContactModificationContext) {
        let (Some(collider1), Some(collider2)) = (
            context.colliders.get(context.collider1),
            context.colliders.get(context.collider2),
        ) else {
            return;
        };

        if let Some(coefficients) = self.get(MaterialId::of(collider1), MaterialId::of(collider2)) {
            for contact in context.solver_contacts.iter_mut() {
                contact.friction = coefficients.friction;
                contact.restitution = coefficients.restitution;
            }
        }
    }
}
