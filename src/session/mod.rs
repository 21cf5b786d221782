//! Session controller: sequences rules-engine calls, owns the move counter
//! and best-score persistence. This is the surface a frontend talks to; the
//! engine itself stays a pure function underneath.

mod store;

pub use store::{JsonScoreStore, MemoryScoreStore, ScoreStore};

use crate::core::{step, Board, Direction, MoveEvent, StepUpdate};
use crate::error::{GameError, Result};
use crate::levels::{LevelDef, LEVELS};
use log::{debug, info};

/// Outcome of one attempt. Won and Lost are terminal: further directional
/// input is inert until a reset or level change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttemptState {
    Playing,
    Won,
    Lost,
}

pub struct Session {
    level_index: usize,
    board: Board,
    state: AttemptState,
    has_treat: bool,
    move_count: u32,
    last_event: Option<MoveEvent>,
    new_record: bool,
    store: Box<dyn ScoreStore>,
}

impl Session {
    /// Starts on the first level of the table.
    pub fn new(store: Box<dyn ScoreStore>) -> Result<Self> {
        let mut session = Self {
            level_index: 0,
            board: Board::from_cells(Vec::new()),
            state: AttemptState::Playing,
            has_treat: false,
            move_count: 0,
            last_event: None,
            new_record: false,
            store,
        };
        session.load_level(0)?;
        Ok(session)
    }

    /// Switches to `index`, rejecting out-of-range or malformed levels
    /// without touching the current attempt.
    pub fn load_level(&mut self, index: usize) -> Result<()> {
        let def = LEVELS
            .get(index)
            .ok_or(GameError::InvalidLevelIndex(index))?;
        let board = def.board()?;

        self.level_index = index;
        self.board = board;
        self.state = AttemptState::Playing;
        self.has_treat = false;
        self.move_count = 0;
        self.last_event = None;
        self.new_record = false;
        debug!("loaded level {index} ({})", def.name);
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.load_level(self.level_index)
    }

    /// Resolves one directional input. Returns the raised event, or `None`
    /// when the input was inert (attempt already over, or no player).
    ///
    /// A blocked move changes nothing and does not count; any committed
    /// move increments the counter. The winning move records a new best
    /// when it strictly beats the stored one.
    pub fn move_player(&mut self, direction: Direction) -> Option<MoveEvent> {
        if self.state != AttemptState::Playing {
            return None;
        }

        match step(&self.board, direction, self.has_treat) {
            StepUpdate::NoChange => None,
            StepUpdate::Blocked => {
                self.last_event = Some(MoveEvent::Blocked);
                Some(MoveEvent::Blocked)
            }
            StepUpdate::NextState(board, has_treat, event) => {
                self.board = board;
                self.has_treat = has_treat;
                self.move_count += 1;
                self.last_event = Some(event);
                match event {
                    MoveEvent::Won => {
                        self.state = AttemptState::Won;
                        self.record_completion();
                    }
                    MoveEvent::Lost => {
                        self.state = AttemptState::Lost;
                    }
                    _ => {}
                }
                Some(event)
            }
        }
    }

    fn record_completion(&mut self) {
        let key = self.level_key();
        let best = self.store.get(&key);
        if best.is_none_or(|b| self.move_count < b) {
            self.store.set(&key, self.move_count);
            self.new_record = true;
            info!(
                "new record on level {}: {} moves",
                self.level_index, self.move_count
            );
        }
    }

    pub fn clear_all_progress(&mut self) {
        self.store.clear();
    }

    pub fn level_key(&self) -> String {
        self.level_index.to_string()
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level(&self) -> &'static LevelDef {
        &LEVELS[self.level_index]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn has_treat(&self) -> bool {
        self.has_treat
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_event(&self) -> Option<MoveEvent> {
        self.last_event
    }

    /// True once the current attempt set a new best. Cleared on load/reset.
    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn best_moves(&self) -> Option<u32> {
        self.store.get(&self.level_key())
    }
}
