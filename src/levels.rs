//! Pre-authored levels. Pure data: every consumption parses the layout into
//! a fresh `Board`, the table itself is never mutated.
//!
//! Glyphs: `#` wall, `@` corgi, `$` block, `o` treat, `.` goal, `!` poop,
//! space empty.

use crate::core::{Board, Cell, Entity};
use crate::error::{GameError, Result};

pub struct LevelDef {
    pub name: &'static str,
    pub difficulty: &'static str,
    pub(crate) layout: &'static str,
}

impl LevelDef {
    /// Deep-copies the template into a playable board, validating it whole:
    /// a level either loads completely or not at all.
    pub fn board(&self) -> Result<Board> {
        let board = parse_layout(self.layout)?;
        let players = board.player_count();
        if players != 1 {
            return Err(GameError::MalformedLevel(format!(
                "{}: expected exactly one player, found {players}",
                self.name
            )));
        }
        Ok(board)
    }
}

pub fn parse_layout(s: &str) -> Result<Board> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }
        let row = line.chars().map(cell_from_glyph).collect::<Result<Vec<_>>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(GameError::MalformedLevel(format!(
                    "ragged rows: {} vs {}",
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(GameError::MalformedLevel("empty layout".into()));
    }
    Ok(Board::from_cells(rows))
}

fn cell_from_glyph(ch: char) -> Result<Cell> {
    Ok(match ch {
        '#' => Cell::of(Entity::wall()),
        '@' => Cell::of(Entity::corgi()),
        '$' => Cell::of(Entity::block()),
        'o' => Cell::of(Entity::treat()),
        '.' => Cell::of(Entity::goal()),
        '!' => Cell::of(Entity::poop()),
        ' ' => Cell::empty(),
        other => {
            return Err(GameError::MalformedLevel(format!("unknown glyph {other:?}")));
        }
    })
}

pub static LEVELS: [LevelDef; 11] = [
    LevelDef {
        name: "Level 1",
        difficulty: "Easy",
        layout: "\
#######
#@#  .#
#$  ###
#  # o#
## #$ #
#$ $  #
#######",
    },
    LevelDef {
        name: "Level 2",
        difficulty: "Easy",
        layout: "\
#######
# #.  #
#$ ## #
#o$ $ #
## #  #
#@  $ #
#######",
    },
    LevelDef {
        name: "Level 3",
        difficulty: "Easy",
        layout: "\
#######
#.  #$#
##    #
## $  #
##$## #
#  @#o#
#######",
    },
    LevelDef {
        name: "Level 4",
        difficulty: "Medium",
        layout: "\
#######
#    .#
# #$###
# $ #!#
# $   #
# @# o#
#######",
    },
    LevelDef {
        name: "Level 5",
        difficulty: "Medium",
        layout: "\
#######
#@ # o#
# $ $ #
## # ##
# $ $ #
#$ # .#
#######",
    },
    LevelDef {
        name: "Level 6",
        difficulty: "Medium",
        layout: "\
#######
# $  .#
# # # #
# #o$ #
# $#  #
#@  $ #
#######",
    },
    LevelDef {
        name: "Level 7",
        difficulty: "Hard",
        layout: "\
#######
# .#  #
#$ # $#
#     #
##$## #
#o @  #
#######",
    },
    LevelDef {
        name: "Level 8",
        difficulty: "Hard",
        layout: "\
#######
#  # .#
#$ #  #
# $ $ #
## # ##
#o @  #
#######",
    },
    LevelDef {
        name: "Level 9",
        difficulty: "Hard",
        layout: "\
#######
#. $ o#
## # ##
# $ $ #
#$# # #
#  $ @#
#######",
    },
    LevelDef {
        name: "Level 10",
        difficulty: "Expert",
        layout: "\
#######
#o  #.#
## $  #
# $ $##
### # #
#@ $ $#
#######",
    },
    LevelDef {
        name: "Level X",
        difficulty: "Dev Levels",
        layout: "\
#######
#     #
#     #
# @o. #
#  $! #
#     #
#######",
    },
];
