pub mod api;
pub mod config;
pub mod core_types;
pub mod error;
pub mod formula;
pub mod optimizer;
pub mod scorer;

pub use crate::api::{pick_team, PickedPosition};
pub use crate::core_types::{Player, PositionRequirements};
pub use crate::error::{LfResult, LineupError};
