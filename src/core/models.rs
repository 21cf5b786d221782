use bitflags::bitflags;

bitflags! {
    /// Capability tags. All rule dispatch is a set-membership test against
    /// this closed vocabulary, never against the entity kind.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Tags: u8 {
        /// The single player-controlled entity.
        const YOU = 1;
        /// Displaced one cell further when the player walks into it.
        const PUSH = 1 << 1;
        /// Nothing may enter this cell.
        const WALL = 1 << 2;
        /// Ends the attempt successfully, once the collectible is held.
        const WIN = 1 << 3;
        /// Removed on entry and unlocks the win tile.
        const COLLECTIBLE = 1 << 4;
        /// Ends the attempt fatally on entry.
        const DEFEAT = 1 << 5;
        /// Pushables may not be shoved onto this cell.
        const NO_PUSH = 1 << 6;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Corgi,
    Block,
    Wall,
    Treat,
    Goal,
    Poop,
}

/// Immutable value record occupying one board cell. Identity is value
/// equality; there is no separate id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub tags: Tags,
}

impl Entity {
    pub const fn corgi() -> Self {
        Self { kind: EntityKind::Corgi, tags: Tags::YOU }
    }

    pub const fn block() -> Self {
        Self { kind: EntityKind::Block, tags: Tags::PUSH }
    }

    pub const fn wall() -> Self {
        Self { kind: EntityKind::Wall, tags: Tags::WALL.union(Tags::NO_PUSH) }
    }

    pub const fn treat() -> Self {
        Self { kind: EntityKind::Treat, tags: Tags::COLLECTIBLE.union(Tags::NO_PUSH) }
    }

    pub const fn goal() -> Self {
        Self { kind: EntityKind::Goal, tags: Tags::WIN.union(Tags::NO_PUSH) }
    }

    pub const fn poop() -> Self {
        Self { kind: EntityKind::Poop, tags: Tags::DEFEAT.union(Tags::NO_PUSH) }
    }
}

/// Ordered stack of entities at one coordinate. Order carries no gameplay
/// meaning but insertion order is preserved when cells are copied; movers
/// are always appended on top.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Cell {
    entities: Vec<Entity>,
}

impl Cell {
    pub const fn empty() -> Self {
        Self { entities: Vec::new() }
    }

    pub fn of(entity: Entity) -> Self {
        Self { entities: vec![entity] }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn has_tag(&self, tags: Tags) -> bool {
        self.entities.iter().any(|e| e.tags.intersects(tags))
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Removes the first entity carrying any of `tags`, keeping the rest of
    /// the stack in order.
    pub fn remove_tagged(&mut self, tags: Tags) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.tags.intersects(tags))?;
        Some(self.entities.remove(index))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

/// Rectangular grid of cells, row-major. Dimensions are fixed for the
/// lifetime of a level; the rules engine never mutates a board in place.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn cols(&self) -> i32 {
        if self.cells.is_empty() {
            0
        } else {
            self.cells[0].len() as i32
        }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x >= 0 && pos.x < self.cols() && pos.y >= 0 && pos.y < self.rows()
    }

    pub fn cell(&self, pos: Vec2) -> &Cell {
        &self.cells[pos.y as usize][pos.x as usize]
    }

    pub fn cell_mut(&mut self, pos: Vec2) -> &mut Cell {
        &mut self.cells[pos.y as usize][pos.x as usize]
    }
}

/// Outcome flag raised by a committed or rejected move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveEvent {
    Blocked,
    Moved,
    PickedUp,
    Won,
    Lost,
}

pub enum StepUpdate {
    /// Committed move: next board, treat possession after it, and the event.
    NextState(Board, bool, MoveEvent),
    /// Rejected move, board untouched. Surfaced to the frontend as a bump.
    Blocked,
    /// No player on the board; nothing to do.
    NoChange,
}
