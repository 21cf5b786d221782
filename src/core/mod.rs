mod model_helpers;
mod models;
mod update;

pub use models::{
    Board, Cell, Direction, Entity, EntityKind, MoveEvent, StepUpdate, Tags, Vec2,
};
pub use update::step;
