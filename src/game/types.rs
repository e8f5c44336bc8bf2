// Shared enums used by the game loop

/// Whether the main loop keeps going after handling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Where a point in the arena sits, as far as the ring predicates can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    InRing,
    Apron,
    NearWeapons,
    Outside,
}

impl Zone {
    pub fn label(&self) -> &'static str {
        match self {
            Zone::InRing => "IN RING",
            Zone::Apron => "APRON",
            Zone::NearWeapons => "WEAPONS",
            Zone::Outside => "OUTSIDE",
        }
    }
}
