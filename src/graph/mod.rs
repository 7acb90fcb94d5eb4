//! A graph stored as a plain list of edges.

mod edge_list;

pub use self::edge_list::{Edge, EdgeListGraph, Vertex};
