use crate::arena::{Arena, Handle};
use log::debug;
use std::fmt;

/// A handle to a vertex of an `EdgeListGraph<V, E>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Vertex(Handle);

/// A handle to an edge of an `EdgeListGraph<V, E>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge(Handle);

struct EdgeRecord<E> {
    element: E,
    source: Vertex,
    destination: Vertex,
}

impl<E> EdgeRecord<E> {
    fn touches(&self, vertex: Vertex) -> bool {
        self.source == vertex || self.destination == vertex
    }
}

/// A graph that keeps its vertices and its edges in two unrelated collections.
///
/// Each edge records its two end vertices, and nothing else links vertices to edges, so every
/// query about the edges of a vertex scans the whole edge list. In a directed graph an edge goes
/// from its source to its destination. In an undirected graph the two ends are interchangeable.
///
/// Vertex and edge handles are only valid for the graph that returned them, and only until the
/// vertex or edge is removed. Methods panic when handed an invalid handle.
///
/// # Examples
///
/// ```
/// use keyed_collections::graph::EdgeListGraph;
///
/// let mut graph = EdgeListGraph::new();
/// let a = graph.insert_vertex("a");
/// let b = graph.insert_vertex("b");
/// let c = graph.insert_vertex("c");
/// let ab = graph.insert_edge(a, b, 1);
/// let bc = graph.insert_edge(b, c, 2);
///
/// assert_eq!(graph.incident_edges(b), vec![ab, bc]);
/// assert_eq!(graph.opposite(b, bc), Some(c));
/// assert_eq!(graph.get_edge(b, a), Some(ab));
///
/// assert_eq!(graph.remove_vertex(b), "b");
/// assert_eq!(graph.num_edges(), 0);
/// ```
pub struct EdgeListGraph<V, E> {
    vertices: Arena<V>,
    edges: Arena<EdgeRecord<E>>,
    directed: bool,
}

impl<V, E> EdgeListGraph<V, E> {
    /// Constructs a new, empty undirected `EdgeListGraph<V, E>`.
    pub fn new() -> Self {
        EdgeListGraph {
            vertices: Arena::new(),
            edges: Arena::new(),
            directed: false,
        }
    }

    /// Constructs a new, empty directed `EdgeListGraph<V, E>`.
    pub fn directed() -> Self {
        EdgeListGraph {
            vertices: Arena::new(),
            edges: Arena::new(),
            directed: true,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn insert_vertex(&mut self, element: V) -> Vertex {
        Vertex(self.vertices.allocate(element))
    }

    /// Inserts an edge from `source` to `destination` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not in the graph.
    pub fn insert_edge(&mut self, source: Vertex, destination: Vertex, element: E) -> Edge {
        if self.vertices.get(source.0).is_none() || self.vertices.get(destination.0).is_none() {
            panic!("Error: edge end is not a vertex of this graph.");
        }
        Edge(self.edges.allocate(EdgeRecord {
            element,
            source,
            destination,
        }))
    }

    /// Removes a vertex together with every edge incident on it and returns its element.
    pub fn remove_vertex(&mut self, vertex: Vertex) -> V {
        let incident = self.incident_edges(vertex);
        debug!("removing vertex with {} incident edges", incident.len());
        for edge in incident {
            self.edges.free(edge.0);
        }
        self.vertices.free(vertex.0)
    }

    pub fn remove_edge(&mut self, edge: Edge) -> E {
        self.edges.free(edge.0).element
    }

    /// Returns a reference to the element of `vertex`, or `None` if it is not in the graph.
    pub fn vertex(&self, vertex: Vertex) -> Option<&V> {
        self.vertices.get(vertex.0)
    }

    pub fn vertex_mut(&mut self, vertex: Vertex) -> Option<&mut V> {
        self.vertices.get_mut(vertex.0)
    }

    /// Returns a reference to the element of `edge`, or `None` if it is not in the graph.
    pub fn edge(&self, edge: Edge) -> Option<&E> {
        self.edges.get(edge.0).map(|record| &record.element)
    }

    pub fn edge_mut(&mut self, edge: Edge) -> Option<&mut E> {
        self.edges.get_mut(edge.0).map(|record| &mut record.element)
    }

    /// Returns every edge that has `vertex` as one of its ends, in edge list order.
    pub fn incident_edges(&self, vertex: Vertex) -> Vec<Edge> {
        if self.vertices.get(vertex.0).is_none() {
            panic!("Error: vertex is not in this graph.");
        }
        self.edges
            .iter()
            .filter(|(_, record)| record.touches(vertex))
            .map(|(handle, _)| Edge(handle))
            .collect()
    }

    /// Returns an edge that connects `source` to `destination`. In an undirected graph an edge
    /// from `destination` to `source` also matches.
    pub fn get_edge(&self, source: Vertex, destination: Vertex) -> Option<Edge> {
        let directed = self.directed;
        self.edges
            .iter()
            .find(|(_, record)| {
                (record.source == source && record.destination == destination)
                    || (!directed && record.source == destination && record.destination == source)
            })
            .map(|(handle, _)| Edge(handle))
    }

    /// Returns the end of `edge` other than `vertex`, or `None` if `vertex` is not an end of
    /// `edge`.
    pub fn opposite(&self, vertex: Vertex, edge: Edge) -> Option<Vertex> {
        let record = &self.edges[edge.0];
        if record.source == vertex {
            Some(record.destination)
        } else if record.destination == vertex {
            Some(record.source)
        } else {
            None
        }
    }

    /// Returns the source and destination of `edge`.
    pub fn end_vertices(&self, edge: Edge) -> (Vertex, Vertex) {
        let record = &self.edges[edge.0];
        (record.source, record.destination)
    }

    /// Returns an iterator over the vertex handles of the graph.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().map(|(handle, _)| Vertex(handle))
    }

    /// Returns an iterator over the edge handles of the graph.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(handle, _)| Edge(handle))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<V, E> Default for EdgeListGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for EdgeListGraph<V, E>
where
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let edges = self.edges.iter().map(|(_, record)| {
            (
                &self.vertices[record.source.0],
                &self.vertices[record.destination.0],
                &record.element,
            )
        });
        f.debug_struct("EdgeListGraph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices.iter().map(|(_, v)| v).collect::<Vec<_>>())
            .field("edges", &edges.collect::<Vec<_>>())
            .finish()
    }
}
