//! Undirected co-appearance multigraph over actor names.
//!
//! Vertices and edges live in two growable arrays and refer to each other by
//! index. Each vertex keeps the list of its incident edges in insertion order,
//! which is the order the breadth-first search later walks them in.

use std::collections::HashMap;

use log::{debug, info, warn};
use thiserror::Error;

use crate::data_loading::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("{0:?} is not a vertex of the graph")]
    UnknownVertex(String),
    #[error("refusing to connect {0:?} to itself")]
    SelfLoop(String),
    #[error("{0:?} is not an endpoint of the edge")]
    NotAnEndpoint(String),
}

/// Two actors who shared a cast list, labeled with the movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoAppearance {
    endpoints: (VertexId, VertexId),
    movie: String,
}

impl CoAppearance {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        self.endpoints
    }

    pub fn movie(&self) -> &str {
        &self.movie
    }

    /// The endpoint that is not `vertex`, or `None` if `vertex` isn't on this edge.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        match self.endpoints {
            (a, b) if a == vertex => Some(b),
            (a, b) if b == vertex => Some(a),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    edges: Vec<CoAppearance>,
    incidence: Vec<Vec<EdgeId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor, or returns the existing vertex if the name is already present.
    pub fn insert_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VertexId(self.names.len());
        self.names.push(name.to_string());
        self.incidence.push(Vec::new());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Appends a new edge between two existing actors. Parallel edges are kept.
    pub fn insert_edge(&mut self, a: &str, b: &str, movie: &str) -> Result<EdgeId, GraphError> {
        let u = self.lookup(a)?;
        let v = self.lookup(b)?;
        if u == v {
            return Err(GraphError::SelfLoop(a.to_string()));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(CoAppearance {
            endpoints: (u, v),
            movie: movie.to_string(),
        });
        self.incidence[u.0].push(id);
        self.incidence[v.0].push(id);
        Ok(id)
    }

    pub fn vertex_exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.0]
    }

    pub fn edge(&self, edge: EdgeId) -> &CoAppearance {
        &self.edges[edge.0]
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len()).map(VertexId)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &CoAppearance> + '_ {
        self.edges.iter()
    }

    /// Edges touching `vertex`, in the order they were inserted.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[vertex.0].iter().copied()
    }

    /// Edges touching the named actor. The graph is undirected, so "outgoing"
    /// means every incident edge.
    pub fn outgoing_edges(
        &self,
        name: &str,
    ) -> Result<impl Iterator<Item = &CoAppearance> + '_, GraphError> {
        let vertex = self.lookup(name)?;
        Ok(self.incident_edges(vertex).map(move |id| self.edge(id)))
    }

    /// Name of the other end of `edge` as seen from `name`.
    pub fn opposite(&self, name: &str, edge: &CoAppearance) -> Result<&str, GraphError> {
        let vertex = self.lookup(name)?;
        edge.opposite(vertex)
            .map(|other| self.name(other))
            .ok_or_else(|| GraphError::NotAnEndpoint(name.to_string()))
    }

    fn lookup(&self, name: &str) -> Result<VertexId, GraphError> {
        self.vertex(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }
}

/// Builds the co-appearance graph: one vertex per actor name, and one edge per
/// ordered pair of cast members of each movie, visiting movies in file order
/// and cast members in the order they were listed.
pub fn build_co_appearance_graph(dataset: &Dataset) -> GraphStore {
    let mut graph = GraphStore::new();
    for name in dataset.actors.values() {
        graph.insert_vertex(name);
    } // every actor gets a vertex before any edge is added

    let mut casts: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut dropped = 0usize;
    for entry in &dataset.cast {
        let Some(actor) = dataset.actors.get(&entry.actor_id) else {
            warn!(
                "cast entry for movie {} names unknown actor id {}",
                entry.movie_id, entry.actor_id
            );
            dropped += 1;
            continue;
        };
        if !dataset.movies.contains_key(&entry.movie_id) {
            warn!(
                "cast entry for actor id {} names unknown movie id {}",
                entry.actor_id, entry.movie_id
            );
            dropped += 1;
            continue;
        }
        casts
            .entry(entry.movie_id.as_str())
            .or_default()
            .push(actor.as_str());
    } // groups cast members per movie id, keeping the listed order

    let mut skipped = 0usize;
    for (movie_id, movie) in &dataset.movies {
        let Some(cast) = casts.get(movie_id.as_str()) else {
            continue; // nobody listed for this movie
        };
        for (i, &actor) in cast.iter().enumerate() {
            for &co_star in &cast[i + 1..] {
                if let Err(err) = graph.insert_edge(actor, co_star, movie) {
                    debug!("skipping edge in {}: {}", movie, err);
                    skipped += 1;
                }
            }
        }
    }

    info!(
        "built co-appearance graph with {} actors and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    info!("{} cast entries dropped, {} edges skipped", dropped, skipped);
    graph
}
