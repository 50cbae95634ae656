//! Directed dependency graph with cycle detection and topological sort.
//!
//! Vertices are identified by canonical absolute file paths. Edges point
//! from a *required* file to the file that *requires* it (dependency →
//! dependent), so a topological order places every required file strictly
//! before its dependents.
//!
//! Both traversals are iterative: they keep an explicit stack of
//! `(vertex, next-edge-index)` frames instead of recursing, so deep
//! graphs cannot overflow the call stack. Traversal marks live in a map
//! owned by each traversal call rather than on the vertices, so
//! independent passes can never leak state into each other.

use std::collections::{BTreeMap, HashMap};

/// Traversal mark used by cycle detection and topological sort.
///
/// `InProgress` means the vertex is on the current depth-first path;
/// meeting one again on that path is a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

#[derive(Debug, Default)]
struct Vertex {
    /// Outgoing edge targets (files that require this one), in insertion
    /// order, without duplicates.
    dependents: Vec<String>,
}

/// A directed graph of file dependencies.
///
/// Vertices are stored in a `BTreeMap` so every iteration over the graph
/// is in lexicographic order of vertex identity — the deterministic
/// tie-break that makes output reproducible across runs.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    vertices: BTreeMap<String, Vertex>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated vertex. Does nothing if the vertex already exists.
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        self.vertices.entry(name.into()).or_default();
    }

    /// Add a directed edge from `dependency` to `dependent`.
    ///
    /// Missing endpoints are inserted. A duplicate edge between the same
    /// ordered pair is not re-inserted.
    pub fn add_edge(&mut self, dependency: &str, dependent: &str) {
        self.add_vertex(dependent);
        let vertex = self.vertices.entry(dependency.to_string()).or_default();
        if !vertex.dependents.iter().any(|d| d == dependent) {
            vertex.dependents.push(dependent.to_string());
        }
    }

    /// Whether a vertex with this identity exists.
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate vertex identities in lexicographic order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Find a cycle, returning the identity of the first vertex observed
    /// twice on one depth-first path (a self-edge counts).
    ///
    /// Runs in O(V + E). Starting vertices are tried in lexicographic
    /// order so the reported vertex is deterministic.
    pub fn find_cycle(&self) -> Option<String> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.vertices.len());

        for start in self.vertices.keys() {
            if mark_of(&marks, start) != Mark::Unvisited {
                continue;
            }

            // Explicit depth-first frames: (vertex, index of next edge).
            let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
            marks.insert(start.as_str(), Mark::InProgress);

            while let Some(frame) = stack.last_mut() {
                let vertex = frame.0;
                let dependents = &self.vertices[vertex].dependents;
                if frame.1 < dependents.len() {
                    let target = dependents[frame.1].as_str();
                    frame.1 += 1;
                    match mark_of(&marks, target) {
                        Mark::InProgress => return Some(target.to_string()),
                        Mark::Unvisited => {
                            marks.insert(target, Mark::InProgress);
                            stack.push((target, 0));
                        }
                        Mark::Finished => {}
                    }
                } else {
                    // All outgoing edges explored without finding a cycle.
                    marks.insert(vertex, Mark::Finished);
                    stack.pop();
                }
            }
        }

        None
    }

    /// Whether the graph contains any cycle.
    pub fn is_cyclic(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Topologically sort the graph, dependencies before dependents.
    ///
    /// Returns `None` if the graph is cyclic. Depth-first post-order,
    /// emitted in reverse; starting vertices are taken in reverse
    /// lexicographic order, which makes unconstrained vertices come out
    /// in lexicographic order of identity.
    pub fn topological_sort(&self) -> Option<Vec<String>> {
        if self.is_cyclic() {
            return None;
        }

        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.vertices.len());
        let mut post_order: Vec<&str> = Vec::with_capacity(self.vertices.len());

        for start in self.vertices.keys().rev() {
            if mark_of(&marks, start) != Mark::Unvisited {
                continue;
            }

            let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
            marks.insert(start.as_str(), Mark::InProgress);

            while let Some(frame) = stack.last_mut() {
                let vertex = frame.0;
                let dependents = &self.vertices[vertex].dependents;
                if frame.1 < dependents.len() {
                    let target = dependents[frame.1].as_str();
                    frame.1 += 1;
                    if mark_of(&marks, target) == Mark::Unvisited {
                        marks.insert(target, Mark::InProgress);
                        stack.push((target, 0));
                    }
                } else {
                    marks.insert(vertex, Mark::Finished);
                    post_order.push(vertex);
                    stack.pop();
                }
            }
        }

        post_order.reverse();
        Some(post_order.into_iter().map(str::to_string).collect())
    }
}

fn mark_of(marks: &HashMap<&str, Mark>, vertex: &str) -> Mark {
    marks.get(vertex).copied().unwrap_or(Mark::Unvisited)
}
