use std::collections::HashSet;
use std::hash::Hash;

use crate::units::Pt;

/// Where a resolution is in its walk along the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowPhase {
    /// Measuring a container's content
    Placing,
    /// Content exceeds the container
    Overflowing,
    /// Resolving the successor link
    SeekingSuccessor,
    /// No successor could take the overflow
    Exhausted,
    /// The overflow was moved to the successor
    Done,
}

/// Why a resolution stopped with text left over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exhaustion {
    /// The last container doesn't name a successor
    NoSuccessor,
    /// The named successor can't be found anywhere
    SuccessorMissing,
    /// The successor was already part of this walk
    Cycle,
}

/// Terminal state of a resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowState {
    Placed,
    Exhausted(Exhaustion),
}

impl FlowState {
    pub fn is_placed(&self) -> bool {
        matches!(self, FlowState::Placed)
    }
}

/// Result of [`resolve_overflow`](crate::flow::resolve_overflow): the last
/// container reached, its page, and how much text could not be placed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlowOutcome<P, C> {
    pub page: P,
    pub container: C,
    pub state: FlowState,
    /// Rendered height of the text still overflowing `container`
    pub unplaced: Pt,
}

/// State of one overflow resolution. Built per top-level call.
#[derive(Debug, Clone)]
pub struct FlowSession<P, C: Eq + Hash> {
    pub visited: HashSet<C>,
    pub result_page: Option<P>,
    /// Containers measured so far
    pub steps: usize,
    pub phase: FlowPhase,
}

impl<P, C: Copy + Eq + Hash> FlowSession<P, C> {
    /// A session whose walk starts at `start`
    pub fn new(start: C) -> Self {
        FlowSession {
            visited: HashSet::from([start]),
            result_page: None,
            steps: 0,
            phase: FlowPhase::Placing,
        }
    }

    pub fn has_visited(&self, container: C) -> bool {
        self.visited.contains(&container)
    }
}
