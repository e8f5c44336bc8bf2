// Game module - the arena's event-loop shell
//
// This module contains:
// - championship.rs: ChampionshipWrestling, match state and per-frame draw
// - overlay.rs: debug overlay for the ring's zone predicates
// - types.rs: shared enums

pub mod championship;
pub mod overlay;
pub mod types;

pub use championship::ChampionshipWrestling;
pub use types::*;
