use crate::core::{Board, Tags, Vec2};

impl Board {
    /// Coordinate of the `YOU`-tagged entity, if one is on the board.
    pub fn find_player(&self) -> Option<Vec2> {
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                let pos = Vec2 { x, y };
                if self.cell(pos).has_tag(Tags::YOU) {
                    return Some(pos);
                }
            }
        }
        None
    }

    pub fn player_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                count += self
                    .cell(Vec2 { x, y })
                    .entities()
                    .iter()
                    .filter(|e| e.tags.contains(Tags::YOU))
                    .count();
            }
        }
        count
    }
}
