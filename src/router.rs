//! Weighted router: importance-driven best-first routes from the origin
//!
//! Stepping onto a cell costs the negated importance weight of its label, so the
//! cheapest route is the one passing the most important places. Negative costs rule
//! out a plain shortest path argument, see [`dijkstra_nodes_full`] for the settle-once
//! rule that keeps the search finite.

use log::{debug, info};

use crate::collections::FxIndexMap;
use crate::errors::RouteError;
use crate::graph_algos::dijkstra::{SearchStats, dijkstra_nodes_full};
use crate::graph_algos::{GraphNodeMap, shortest_path};
use crate::importance::ImportanceMap;
use crate::town::{Cell, ORIGIN, TownGrid};


/// Result of one search from the origin
#[derive(Clone, Debug)]
pub struct Routes {
    nodes: GraphNodeMap<Cell, f64>,
    stats: SearchStats,
}

impl Routes {

    /// Best recorded cost from the origin, None if never reached
    pub fn distance(&self, cell: Cell) -> Option<f64> {
        self.nodes.get(&cell).map(|&(_, cost)| cost)
    }

    /// Cell the best cost was reached from, None for the origin and unreached cells
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        let &(parent, _) = self.nodes.get(&cell)?;
        self.nodes.get_index(parent).map(|(p, _)| *p)
    }

    /// Cell -> best cost, in discovery order
    pub fn distances(&self) -> FxIndexMap<Cell, f64> {
        self.nodes.iter().map(|(&cell, &(_, cost))| (cell, cost)).collect()
    }

    /// Cell -> predecessor, the origin has no entry
    pub fn predecessors(&self) -> FxIndexMap<Cell, Cell> {
        self.nodes
            .iter()
            .filter_map(|(&cell, &(parent, _))| self.nodes.get_index(parent).map(|(&p, _)| (cell, p)))
            .collect()
    }

    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.nodes.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Path from the origin to target, checked for reachability
    pub fn path_to(&self, target: Cell) -> Result<Vec<Cell>, RouteError> {
        let Some(index) = self.nodes.get_index_of(&target) else {
            return Err(RouteError::Unreachable(target));
        };
        shortest_path(&self.nodes, index)
    }
}


/// Search the whole grid from the origin
/// Unlisted labels weigh DEFAULT_WEIGHT. Pure, same inputs give the same maps.
pub fn compute_routes(grid: &TownGrid, importance: &ImportanceMap) -> Result<Routes, RouteError> {
    let size = grid.size();

    let neighbors = |cell: &Cell| -> Vec<(Cell, f64)> {
        cell.neighbors(size)
            .filter_map(|next| grid.label(next).map(|label| (next, importance.edge_cost(label))))
            .collect()
    };

    let (nodes, stats) = dijkstra_nodes_full(ORIGIN, neighbors)?;
    debug!("routes computed over {size}x{size} grid: {stats}");

    Ok(Routes { nodes, stats })
}


/// Follow predecessor links back from target, then prepend the origin
///
/// The walk stops at the first cell without a predecessor, so an unreachable target
/// yields just `[origin]` rather than an error. Use [`Routes::path_to`] to tell the two apart.
pub fn reconstruct_path(predecessors: &FxIndexMap<Cell, Cell>, target: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = target;

    while let Some(&previous) = predecessors.get(&current) {
        // a chain longer than the map is a loop, stop walking
        if path.len() > predecessors.len() {
            break;
        }
        path.push(current);
        current = previous;
    }
    path.push(ORIGIN);

    path.reverse();
    path
}


/// Sum of step costs along a path, the origin itself is free
pub fn path_cost(grid: &TownGrid, importance: &ImportanceMap, path: &[Cell]) -> f64 {
    path.iter()
        .skip(1)
        .filter_map(|&cell| grid.label(cell))
        .map(|label| importance.edge_cost(label))
        .sum()
}


/// Destination of the route
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub cell: Cell,
    pub label: String,
    pub weight: f64,
}

/// First cell, row-major, holding the most important label
/// None if nothing is ranked or the top label does not occur in the grid
pub fn select_target(grid: &TownGrid, importance: &ImportanceMap) -> Option<Target> {
    let (label, weight) = importance.most_important()?;
    let cell = grid.find(label);
    if cell.is_none() {
        debug!("most important location {label:?} does not occur in the grid");
    }

    cell.map(|cell| Target {
        cell,
        label: label.to_string(),
        weight,
    })
}


/// A finished route to the most important location
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    pub target: Target,
    pub path: Vec<Cell>,
    pub cost: f64,
}

/// Select the target, search and reconstruct
/// Ok(None) means no important location was found
pub fn plan_route(grid: &TownGrid, importance: &ImportanceMap) -> Result<Option<RoutePlan>, RouteError> {
    let Some(target) = select_target(grid, importance) else {
        info!("no important location found");
        return Ok(None);
    };

    let routes = compute_routes(grid, importance)?;
    let path = routes.path_to(target.cell)?;
    let cost = routes.distance(target.cell).ok_or(RouteError::Unreachable(target.cell))?;

    info!(
        "route to {} at {} with {} steps, cost {cost}",
        target.label,
        target.cell,
        path.len().saturating_sub(1)
    );

    Ok(Some(RoutePlan { target, path, cost }))
}
