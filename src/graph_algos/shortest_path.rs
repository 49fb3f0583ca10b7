use crate::errors::RouteError;
use super::{GraphNodeMap, NO_PARENT};

/// Walk parent indices from the goal back to the start
/// Returns the ordered path from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != NO_PARENT {
        // A chain longer than the map can only be a loop
        if path.len() > node_map.len() {
            return Err(RouteError::NoPathFound);
        }

        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            return Err(RouteError::NoPathFound);
        };
        path.push(node.clone());
        current_index = parent_index;
    }

    if path.is_empty() {
        return Err(RouteError::NoPathFound);
    }

    path.reverse();
    Ok(path)
}
