//! Rosary nodes: Verlet point masses with implicit velocity.

use alloc::string::String;

use crate::float::Float;
use crate::vec::Vec2;

/// Structural category of a node. Only affects the node's radius (and rendering).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Small bead of a decade.
    Ave,
    /// Larger bead separating decades (and bracketing the pendant).
    Pater,
    /// Centre piece joining the loop to the pendant.
    Medal,
    /// Terminal node the cross hangs from.
    CrossAnchor,
}

/// A Verlet point mass: current and previous position, no explicit velocity.
///
/// Velocity is implied by `pos - prev_pos`, so writing both fields to the
/// same value leaves the node at rest.
#[derive(Clone, Debug)]
pub struct Node<F: Float> {
    pub id: String,
    pub kind: NodeKind,
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub radius: F,
    pub pinned: bool,
}

impl<F: Float> Node<F> {
    pub fn new(id: impl Into<String>, kind: NodeKind, pos: Vec2<F>, radius: F) -> Self {
        Node {
            id: id.into(),
            kind,
            pos,
            prev_pos: pos,
            radius,
            pinned: false,
        }
    }

    /// Advance one Verlet step: damped implied velocity plus `gravity * dt^2` on +y.
    pub fn integrate(&mut self, dt: F, damping: F, gravity: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity + Vec2::new(F::zero(), gravity * dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Displacement since the previous step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Teleport to `pos` with zero implied velocity.
    pub fn place(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Move to `pos`, re-stamping the previous position with the current one first.
    pub fn drag_to(&mut self, pos: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }

    /// Drop any implied velocity without moving.
    pub fn settle(&mut self) {
        self.prev_pos = self.pos;
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Flip the pinned flag and return the new state. Never moves the node.
    pub fn toggle_pin(&mut self) -> bool {
        if self.pinned {
            self.unpin();
        } else {
            self.pin();
        }
        self.pinned
    }

    /// Inverse weight used when splitting corrections: 1 for free nodes, 0 for pinned.
    pub fn inv_weight(&self) -> F {
        if self.pinned { F::zero() } else { F::one() }
    }
}
