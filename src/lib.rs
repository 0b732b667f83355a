//! Kevin Bacon numbers: build a co-appearance graph from actor, movie and cast
//! lists, run one breadth-first search from a root actor, and answer
//! shortest-chain queries against the resulting tree.

pub mod data_loading;
pub mod graph_store;
pub mod logging;
pub mod path_index;
pub mod query_loop;
