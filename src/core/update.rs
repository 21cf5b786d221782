use crate::core::{Board, Direction, MoveEvent, StepUpdate, Tags};

/// Resolves one directional move against `board`. Pure and deterministic:
/// the input board is never touched, a committed move returns a fresh one.
pub fn step(board: &Board, direction: Direction, has_treat: bool) -> StepUpdate {
    let Some(origin) = board.find_player() else {
        return StepUpdate::NoChange;
    };

    let dest = origin + direction.offset();
    if !board.in_bounds(dest) {
        return StepUpdate::Blocked;
    }
    if board.cell(dest).has_tag(Tags::WALL) {
        return StepUpdate::Blocked;
    }

    let mut next = board.clone();

    if next.cell(dest).has_tag(Tags::PUSH) {
        let push_target = dest + direction.offset();
        if !next.in_bounds(push_target) {
            return StepUpdate::Blocked;
        }
        // A second pushable in line blocks too: no chained pushes.
        if next.cell(push_target).has_tag(Tags::WALL | Tags::NO_PUSH | Tags::PUSH) {
            return StepUpdate::Blocked;
        }
        if let Some(block) = next.cell_mut(dest).remove_tagged(Tags::PUSH) {
            next.cell_mut(push_target).push(block);
        }
    }

    let Some(player) = next.cell_mut(origin).remove_tagged(Tags::YOU) else {
        return StepUpdate::NoChange;
    };
    next.cell_mut(dest).push(player);

    // Loss is checked first and short-circuits pickup/win, but the fatal
    // step itself stands: the returned board shows the player on the tile.
    if next.cell(dest).has_tag(Tags::DEFEAT) {
        return StepUpdate::NextState(next, has_treat, MoveEvent::Lost);
    }

    let mut has_treat = has_treat;
    let mut event = MoveEvent::Moved;
    if next.cell_mut(dest).remove_tagged(Tags::COLLECTIBLE).is_some() {
        has_treat = true;
        event = MoveEvent::PickedUp;
    }
    if has_treat && next.cell(dest).has_tag(Tags::WIN) {
        event = MoveEvent::Won;
    }

    StepUpdate::NextState(next, has_treat, event)
}
