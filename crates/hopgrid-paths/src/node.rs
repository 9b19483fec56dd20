// ---------------------------------------------------------------------------
// Search node arena records
// ---------------------------------------------------------------------------

/// Where a node stands in the current search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// Not discovered yet (or left over from an older search).
    #[default]
    Unseen,
    /// In the frontier; `g`, `h` and `parent` may still improve.
    Open,
    /// Finalized. Never updated again during this search.
    Closed,
}

/// Per-coordinate search record, stored in a flat arena indexed by
/// [`Bounds::index`](hopgrid_core::Bounds::index).
///
/// `g`, `h` and `parent` are only ever replaced together.
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<usize>,
    /// Insertion sequence number; kept across decrease-key updates.
    pub(crate) seq: u64,
    pub(crate) state: NodeState,
    pub(crate) generation: u32,
}

impl Node {
    /// Estimated total cost through this node.
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }

    /// State as seen by the search running under `generation`.
    #[inline]
    pub(crate) fn state_in(&self, generation: u32) -> NodeState {
        if self.generation == generation {
            self.state
        } else {
            NodeState::Unseen
        }
    }

    /// Replace the cost record and mark the node open for `generation`.
    #[inline]
    pub(crate) fn open(&mut self, generation: u32, g: i32, h: i32, parent: Option<usize>, seq: u64) {
        self.g = g;
        self.h = h;
        self.parent = parent;
        self.seq = seq;
        self.state = NodeState::Open;
        self.generation = generation;
    }
}

/// Bump a generation counter, resetting `nodes` when it wraps so that
/// stale records can never alias the new generation.
pub(crate) fn next_generation(generation: &mut u32, nodes: &mut [Node]) -> u32 {
    *generation = generation.wrapping_add(1);
    if *generation == 0 {
        for n in nodes.iter_mut() {
            *n = Node::default();
        }
        *generation = 1;
    }
    *generation
}
