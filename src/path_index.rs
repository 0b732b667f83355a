//! Shortest-path tree rooted at a fixed actor.
//!
//! [`PathIndex::build`] runs one breadth-first search over a [`GraphStore`]
//! and records, for every actor it reaches, the edge that first reached it.
//! Following those links back from any actor walks a shortest co-appearance
//! chain to the root, so each query costs O(depth).

use std::collections::VecDeque;
use std::fmt;

use log::info;
use thiserror::Error;

use crate::graph_store::{EdgeId, GraphStore, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("root actor {0:?} is not in the graph")]
    RootNotFound(String),
    #[error("{0:?} is not in the graph")]
    ActorNotFound(String),
}

/// The single outgoing tree edge of a non-root vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    pub toward: VertexId,
    pub edge: EdgeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Unreached,
    Root,
    Child { link: ParentLink, depth: usize },
}

#[derive(Debug)]
pub struct PathIndex<'g> {
    graph: &'g GraphStore,
    root: VertexId,
    slots: Vec<Slot>,
    reached: usize,
}

/// One step of a chain: `actor` appeared in `movie` with `co_star`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'g> {
    pub actor: &'g str,
    pub movie: &'g str,
    pub co_star: &'g str,
}

impl fmt::Display for Hop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} appeared in {} with {}", self.actor, self.movie, self.co_star)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaconPath<'g> {
    pub hops: Vec<Hop<'g>>,
}

impl BaconPath<'_> {
    /// Number of edges between the actor and the root.
    pub fn distance(&self) -> usize {
        self.hops.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reach<'g> {
    Connected(BaconPath<'g>),
    /// The actor exists but shares no chain of movies with the root.
    Unreachable,
}

impl<'g> PathIndex<'g> {
    /// Breadth-first search from `root`. Neighbours are attached in the order the
    /// graph lists its incident edges, so the first edge found to an actor wins.
    pub fn build(graph: &'g GraphStore, root: &str) -> Result<Self, PathError> {
        let root_id = graph
            .vertex(root)
            .ok_or_else(|| PathError::RootNotFound(root.to_string()))?;

        let mut slots = vec![Slot::Unreached; graph.vertex_count()];
        let mut frontier = VecDeque::new();
        slots[root_id.index()] = Slot::Root;
        frontier.push_back((root_id, 0usize));
        let mut reached = 1;

        while let Some((current, depth)) = frontier.pop_front() {
            for edge_id in graph.incident_edges(current) {
                let Some(next) = graph.edge(edge_id).opposite(current) else {
                    continue;
                };
                if slots[next.index()] == Slot::Unreached {
                    slots[next.index()] = Slot::Child {
                        link: ParentLink {
                            toward: current,
                            edge: edge_id,
                        },
                        depth: depth + 1,
                    };
                    reached += 1;
                    frontier.push_back((next, depth + 1));
                }
            }
        } // every reachable vertex is enqueued exactly once

        info!("{} of {} actors are connected to {}", reached, graph.vertex_count(), root);
        Ok(Self {
            graph,
            root: root_id,
            slots,
            reached,
        })
    }

    pub fn graph(&self) -> &'g GraphStore {
        self.graph
    }

    pub fn root(&self) -> &'g str {
        self.graph.name(self.root)
    }

    /// Number of actors in the tree, root included.
    pub fn reached_count(&self) -> usize {
        self.reached
    }

    pub fn vertex_exists(&self, name: &str) -> bool {
        self.graph.vertex_exists(name)
    }

    pub fn is_reachable(&self, name: &str) -> bool {
        self.depth(name).is_some()
    }

    /// BFS depth of `name`, or `None` if it is unknown or unreachable.
    pub fn depth(&self, name: &str) -> Option<usize> {
        match self.slot(self.graph.vertex(name)?) {
            Slot::Unreached => None,
            Slot::Root => Some(0),
            Slot::Child { depth, .. } => Some(depth),
        }
    }

    /// The tree edge leaving `name`; `None` for the root and for actors outside the tree.
    pub fn parent(&self, name: &str) -> Option<ParentLink> {
        match self.slot(self.graph.vertex(name)?) {
            Slot::Child { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Walks the tree from `name` up to the root.
    pub fn find(&self, name: &str) -> Result<Reach<'g>, PathError> {
        let graph = self.graph;
        let mut current = graph
            .vertex(name)
            .ok_or_else(|| PathError::ActorNotFound(name.to_string()))?;

        let mut hops = Vec::new();
        loop {
            match self.slot(current) {
                Slot::Unreached => return Ok(Reach::Unreachable),
                Slot::Root => break,
                Slot::Child { link, .. } => {
                    hops.push(Hop {
                        actor: graph.name(current),
                        movie: graph.edge(link.edge).movie(),
                        co_star: graph.name(link.toward),
                    });
                    current = link.toward;
                }
            }
        }
        Ok(Reach::Connected(BaconPath { hops }))
    }

    /// How many reached actors sit at each distance from the root; entry `n` counts
    /// the actors whose number is `n`.
    pub fn distance_histogram(&self) -> Vec<usize> {
        let mut histogram = Vec::new();
        for slot in &self.slots {
            let depth = match *slot {
                Slot::Unreached => continue,
                Slot::Root => 0,
                Slot::Child { depth, .. } => depth,
            };
            if histogram.len() <= depth {
                histogram.resize(depth + 1, 0);
            }
            histogram[depth] += 1;
        }
        histogram
    }

    fn slot(&self, vertex: VertexId) -> Slot {
        self.slots[vertex.index()]
    }
}
