use crate::errors::RouteError;
use super::{GraphNodeMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt, fmt::Debug, time::{Duration, Instant}};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;


/// Counters collected during one search
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub relaxations: usize, // improvements pushed onto the queue
    pub stale_skipped: usize, // popped entries that were already beaten or settled
    pub duration: Option<Duration>,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes settled, {} relaxations, {} stale entries skipped in {:?}",
            self.nodes_settled, self.relaxations, self.stale_skipped, self.duration.unwrap_or_default()
        )
    }
}


/// Best-first search from start over every reachable node
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Edge costs may be negative. Each node is expanded at most once, when it is popped
/// with its best recorded cost, and is never relaxed again afterwards. Without that rule
/// a negative cost on an undirected edge forms a negative cycle and relaxation never stops.
/// Consequences:
/// - the search always terminates, every node is settled once
/// - parent links always point to a node settled earlier, so they never loop
/// - a node's recorded cost equals the cost of the path its parent links describe
/// - with non-negative costs the result is the exact shortest path tree
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> Result<(GraphNodeMap<N, C>, SearchStats), RouteError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
{
    let started = Instant::now();
    let mut stats = SearchStats::default();

    // Min-queue of (node index, cost at push time)
    // Improvements are pushed again instead of decreasing the key, old entries go stale
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // Best known (parent_index, cost) per node, indices are stable for the whole search
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();
    let mut settled: Vec<bool> = Vec::new();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    settled.push(false);
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            return Err(RouteError::NoPathFound);
        };

        // Lazy deletion: a cheaper entry for this node was already expanded
        if settled[index] || cost > c {
            stats.stale_skipped += 1;
            continue;
        }
        settled[index] = true;
        stats.nodes_settled += 1;

        for (neighbor, edge_cost) in neighbors(node).into_iter() {

            let new_cost = c + edge_cost;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    settled.push(false);
                    i
                }
                Occupied(mut e) => {
                    // Settled nodes are final, only strict improvements count
                    if settled[e.index()] || new_cost >= e.get().1 {
                        continue;
                    }
                    e.insert((index, new_cost));
                    e.index()
                }
            };

            stats.relaxations += 1;
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    stats.duration = Some(started.elapsed());
    debug!("search finished: {stats}");

    Ok((nodes_map, stats))
}


/// Queue entry, ordered so the BinaryHeap pops the lowest cost first
/// Equal costs compare equal, which one pops first is unspecified
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T,
}

impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for NodeId<T> {}
