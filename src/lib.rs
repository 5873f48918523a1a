//! Verlet simulation of an interactive rosary for 2D surfaces.
//!
//! `rosary` models a loop of 54 beads, a medal, a five-bead pendant and a
//! cross anchor as point masses joined by distance links. Each frame the
//! host supplies a time delta; the core integrates, relaxes links, clamps to
//! the surface and optionally pushes overlapping beads apart. Rendering,
//! input translation and frame scheduling stay with the host.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from current/previous positions
//! - **Iterative relaxation**: links, boundary clamps and soft collisions
//! - **Interaction**: nearest-node picking, drag with grab offset, pin toggles
//! - **Highlighting**: address any bead by its stable id
//! - **Scale-aware**: all lengths follow the surface size, rebuilt on rescale
//! - **Observable**: monitor solver phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod link;
pub mod bounds;
pub mod collision;
pub mod graph;
pub mod topology;
pub mod solver;
pub mod interaction;
pub mod scale;
pub mod clock;
pub mod observer;
pub mod config;
pub mod error;
pub mod rosary;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use node::{Node, NodeKind};
pub use link::Link;
pub use bounds::Bounds;
pub use graph::RosaryGraph;
pub use topology::LoopLayout;
pub use solver::{step, StepFlags};
pub use interaction::{nearest_node, DragState, Interaction};
pub use scale::{scale_from_surface, Surface};
pub use clock::FrameClock;
pub use config::{ConfigSnapshot, ScaledConfig, SimConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::{Result, RosaryError};
pub use rosary::Rosary;
