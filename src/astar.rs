//! Best-first search towards a single goal on the room grid. Every node is enqueued at most
//! once; a node reached again through a strictly shorter parent only records that parent's
//! direction as an alternative, and the route is rebuilt from the goal by always stepping to
//! the alternative with the shortest recorded length.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::direction::{Direction, Passages};
use crate::grid::{self, room_id, RoomId};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder {
    estimated_cost: u32,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.index == other.index
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimate first, earliest discovered node on ties
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub position: Point,
    /// Directions leading back towards the start, first found first.
    pub parents: SmallVec<[Direction; 4]>,
    pub length: u32,
    pub heuristic: u32,
}

pub(crate) struct SearchResult {
    pub steps: Option<Vec<Direction>>,
    pub expanded: usize,
}

/// Searches from `start` to `goal`. `passages` yields the exits of a room and `scale` the
/// multiplier applied to the squared distance heuristic of a room. Exploration is cut off at
/// `max_length` steps, tightened to the length of the first route that reaches the goal.
///
/// On success the steps are returned walking outwards from the goal to the start.
pub(crate) fn astar_portal<FP, FS>(
    start: Point,
    goal: Point,
    mut max_length: u32,
    mut passages: FP,
    mut scale: FS,
) -> SearchResult
where
    FP: FnMut(&Point) -> Passages,
    FS: FnMut(&Point) -> f32,
{
    let mut to_see = BinaryHeap::new();
    let mut nodes: FxIndexMap<RoomId, SearchNode> = FxIndexMap::default();
    let start_heuristic = grid::squared_distance(&start, &goal);
    nodes.insert(
        room_id(&start),
        SearchNode {
            position: start,
            parents: SmallVec::new(),
            length: 0,
            heuristic: start_heuristic,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: start_heuristic,
        index: 0,
    });
    let mut expanded = 0;
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        let (position, length) = match nodes.get_index(index) {
            Some((_, node)) => (node.position, node.length),
            None => continue,
        };
        if length + 1 > max_length {
            continue;
        }
        expanded += 1;
        let exits = passages(&position);
        for direction in Direction::ALL {
            if !exits.is_open(direction) {
                continue;
            }
            let Some(next) = grid::neighbour(&position, direction) else {
                continue;
            };
            match nodes.entry(room_id(&next)) {
                Occupied(mut e) => {
                    if length < e.get().length {
                        e.get_mut().parents.push(direction.opposite());
                    }
                }
                Vacant(e) => {
                    let heuristic =
                        (grid::squared_distance(&next, &goal) as f32 * scale(&next)) as u32;
                    let n = e.index();
                    e.insert(SearchNode {
                        position: next,
                        parents: smallvec![direction.opposite()],
                        length: length + 1,
                        heuristic,
                    });
                    to_see.push(SmallestCostHolder {
                        estimated_cost: heuristic,
                        index: n,
                    });
                    if next == goal {
                        max_length = length + 1;
                    }
                }
            }
        }
    }
    let steps = reconstruct(&nodes, goal);
    if steps.is_none() {
        warn!("No route from {} to {} within {} steps", start, goal, max_length);
    } else {
        debug!(
            "Route search expanded {} of {} nodes (start estimate {})",
            expanded,
            nodes.len(),
            nodes.get_index(0).map_or(0, |(_, n)| n.heuristic)
        );
    }
    SearchResult { steps, expanded }
}

/// Walks from `goal` back to the start, at each node taking the parent direction whose room
/// has the shortest recorded length. The first such direction wins ties.
fn reconstruct(nodes: &FxIndexMap<RoomId, SearchNode>, goal: Point) -> Option<Vec<Direction>> {
    let mut node = nodes.get(&room_id(&goal))?;
    let mut position = goal;
    let mut steps = Vec::with_capacity(node.length as usize);
    while node.length != 0 {
        let (direction, parent) = node
            .parents
            .iter()
            .filter_map(|&d| nodes.get(&room_id(&grid::step(&position, d))).map(|n| (d, n)))
            .min_by_key(|(_, n)| n.length)?;
        steps.push(direction);
        position = grid::step(&position, direction);
        node = parent;
    }
    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_field(start: Point, goal: Point) -> SearchResult {
        astar_portal(start, goal, 64, |_| Passages::all(), |_| 1.0)
    }

    #[test]
    fn finds_straight_line() {
        let result = open_field(Point::new(0, 4), grid::origin());
        assert_eq!(result.steps, Some(vec![Direction::South; 4]));
    }

    #[test]
    fn start_equal_goal_is_empty() {
        let result = open_field(Point::new(2, 2), Point::new(2, 2));
        assert_eq!(result.steps, Some(vec![]));
    }

    #[test]
    fn respects_max_length() {
        let result = astar_portal(
            Point::new(0, 10),
            grid::origin(),
            5,
            |_| Passages::all(),
            |_| 1.0,
        );
        assert!(result.steps.is_none());
    }

    #[test]
    fn blocked_start_expands_once() {
        let start = Point::new(3, 0);
        let result = astar_portal(
            start,
            grid::origin(),
            64,
            |p| if *p == start { Passages::empty() } else { Passages::all() },
            |_| 1.0,
        );
        assert!(result.steps.is_none());
        assert_eq!(result.expanded, 1);
    }

    #[test]
    fn holder_orders_smallest_first() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, index) in [(5, 0), (1, 1), (3, 2), (1, 3)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                index,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }
}
