/// Core data types for the route finder
///
/// This module defines the fundamental types used throughout the system:
/// - CityId: opaque, already-normalized city label
/// - Edge: one directed adjacency record (neighbor + distance)
/// - Route: ordered sequence of cities returned by a search

pub mod city;
pub mod edge;
pub mod route;

pub use city::CityId;
pub use edge::{Edge, Weight};
pub use route::Route;
