//! Domain layer: entities, identity rules, and repository traits.

pub mod entities;
pub mod identity;
pub mod repositories;
