//! Importance-weighted bus routes through a generated town.
//!
//! A town is an NxN grid of location types. The user ranks location types by
//! importance and the router finds a route from the top-left corner to the most
//! important location that passes as many important places as it can.

pub mod collections;
pub mod config;
pub mod errors;
pub mod graph_algos;
pub mod importance;
pub mod input;
pub mod render;
pub mod router;
pub mod town;

pub use errors::RouteError;
pub use importance::ImportanceMap;
pub use router::{
    RoutePlan, Routes, Target, compute_routes, plan_route, reconstruct_path, select_target,
};
pub use town::{Cell, ORIGIN, TownGrid};
