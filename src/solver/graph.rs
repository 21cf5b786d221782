use crate::core::Board;
use std::collections::VecDeque;

/// Canonical game state for deduplication: the board value plus treat
/// possession. Cell stacks are positional, so value equality already
/// treats interchangeable blocks as the same state.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UniqueNode {
    pub board: Board,
    pub has_treat: bool,
}

/// Interned set of explored states with a FIFO frontier, so expansion
/// order is breadth-first and recorded depths are minimal move counts.
pub struct StateGraph {
    // map from game state to node id
    nodes: bimap::BiMap<UniqueNode, usize>,
    depths: Vec<u32>,
    frontier: VecDeque<usize>,
    next_id: usize,
}

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            depths: Vec::new(),
            frontier: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Interns `state` at `depth` and queues it for expansion; an already
    /// seen state keeps its original (never larger) depth.
    pub fn upsert_state(&mut self, state: UniqueNode, depth: u32) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;

        // insertion is unique: id is fresh and the state was just checked
        self.nodes.insert_no_overwrite(state, id).unwrap();
        self.depths.push(depth);
        self.frontier.push_back(id);
        id
    }

    pub fn get_state(&self, id: usize) -> Option<&UniqueNode> {
        self.nodes.get_by_right(&id)
    }

    pub fn depth(&self, id: usize) -> u32 {
        self.depths[id]
    }

    pub fn pop_frontier(&mut self) -> Option<usize> {
        self.frontier.pop_front()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
