// src/game/tentacles/mod.rs

// "Tentakel"-Fragen: nächstgelegener Ort einer Kategorie innerhalb eines Radius
pub mod config;
pub mod controller;
pub mod lookup;
pub mod question;

pub use self::config::{DEFAULT_RADIUS, TentacleConfig};
pub use self::controller::{
    Adjustment, TentacleAdjuster, TentacleError, add_default_tentacles, adjust_per_tentacle,
};
pub use self::lookup::{LocationLookup, LookupError, StaticLookup};
pub use self::question::{
    IconColor, QuestionKind, StoredQuestion, TentacleLocation, TentacleQuestion, TentacleTarget,
};
