use crate::core::{step, Board, Direction, MoveEvent, StepUpdate};
use crate::solver::graph::{StateGraph, UniqueNode};

pub enum PopulateResult {
    /// A winning move exists at this depth; search can stop.
    Solved(u32),
    Populated,
    /// Frontier drained without a win: the start state is unwinnable.
    Exhausted,
}

/// Expands one frontier state through all four directions.
pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    let Some(node_id) = graph.pop_frontier() else {
        return PopulateResult::Exhausted;
    };
    let Some(node) = graph.get_state(node_id).cloned() else {
        return PopulateResult::Populated;
    };
    let depth = graph.depth(node_id);

    for direction in Direction::ALL {
        match step(&node.board, direction, node.has_treat) {
            StepUpdate::NextState(board, has_treat, event) => match event {
                MoveEvent::Won => return PopulateResult::Solved(depth + 1),
                // lost states are terminal, nothing reachable beyond them
                MoveEvent::Lost => {}
                MoveEvent::Moved | MoveEvent::PickedUp | MoveEvent::Blocked => {
                    graph.upsert_state(UniqueNode { board, has_treat }, depth + 1);
                }
            },
            StepUpdate::Blocked | StepUpdate::NoChange => {}
        }
    }

    PopulateResult::Populated
}

/// Minimal number of committed moves needed to win from `board`, or `None`
/// when no input sequence wins. Exhaustive over the reachable state space.
pub fn solve(board: &Board) -> Option<u32> {
    let mut graph = StateGraph::new();
    graph.upsert_state(
        UniqueNode { board: board.clone(), has_treat: false },
        0,
    );

    let result = loop {
        match populate_step(&mut graph) {
            PopulateResult::Solved(moves) => break Some(moves),
            PopulateResult::Populated => {}
            PopulateResult::Exhausted => break None,
        }
    };
    log::debug!("explored {} states", graph.node_count());
    result
}
