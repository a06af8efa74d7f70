//! Single-source shortest paths (Dijkstra).
//!
//! The relaxation phase runs once at construction; `distance` and
//! `path_to` can then be queried repeatedly. Only *outgoing* edges are
//! relaxed — an edge participates in relaxation from `u` only when `u` is
//! its recorded "from" endpoint — so graphs that model bidirectional
//! links must carry a directed edge pair per link.
//!
//! Precondition (not checked): all edge weights are non-negative.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{EdgeId, Vertex, VertexId, WeightedEdge, WeightedGraph};

/// A reconstructed shortest path from the source to one destination.
#[derive(Debug, Clone)]
pub struct Path {
    /// Vertices from source to destination, inclusive.
    pub vertices: Vec<VertexId>,
    /// Edges walked, one fewer than `vertices`.
    pub edges: Vec<EdgeId>,
    /// Total weight of the walked edges.
    pub length: f64,
}

impl Path {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Solved single-source shortest paths over one graph snapshot.
pub struct ShortestPaths<'a, V, E> {
    graph: &'a WeightedGraph<V, E>,
    source: VertexId,
    distance: HashMap<VertexId, f64>,
    predecessor: HashMap<VertexId, VertexId>,
}

/// Frontier entry ordered by smallest tentative distance first.
struct FrontierEntry {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert for min-first extraction.
        other.distance.total_cmp(&self.distance)
    }
}

impl<'a, V: Vertex, E: WeightedEdge> ShortestPaths<'a, V, E> {
    /// Run Dijkstra from `source`.
    ///
    /// An unknown source yields a solver that reports every destination
    /// as unreachable.
    pub fn solve(graph: &'a WeightedGraph<V, E>, source: VertexId) -> Self {
        let mut solver = ShortestPaths {
            graph,
            source,
            distance: HashMap::new(),
            predecessor: HashMap::new(),
        };

        if graph.vertex(source).is_none() {
            return solver;
        }

        solver.distance.insert(source, 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            distance: 0.0,
            vertex: source,
        });

        while let Some(entry) = frontier.pop() {
            let u = entry.vertex;
            let dist_u = solver.distance[&u];

            // Stale entry: the vertex was settled through a shorter path
            // after this entry was queued.
            if entry.distance > dist_u {
                continue;
            }

            for &edge in graph.incident_edges(u) {
                let Some((from, _)) = graph.end_vertices(edge) else {
                    continue;
                };
                // Outgoing edges only.
                if from != u {
                    continue;
                }
                let Some(v) = graph.opposite(u, edge) else {
                    continue;
                };
                let weight = graph.edge(edge).map(|e| e.weight()).unwrap_or(0.0);
                let candidate = dist_u + weight;

                let current = solver.distance.get(&v).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    solver.distance.insert(v, candidate);
                    solver.predecessor.insert(v, u);
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        vertex: v,
                    });
                }
            }
        }

        solver
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest-path weight from the source, or `None` when `v` is
    /// unreachable or unknown.
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.distance.get(&v).copied()
    }

    /// Reconstruct the shortest path to `destination` by walking the
    /// predecessor chain.
    ///
    /// Returns `None` for an unreachable or unknown destination — never a
    /// partial path. The path to the source itself is the trivial path
    /// with zero edges.
    pub fn path_to(&self, destination: VertexId) -> Option<Path> {
        // No recorded distance means the relaxation never reached it.
        self.distance.get(&destination)?;

        let mut vertices = vec![destination];
        let mut current = destination;
        while let Some(&pred) = self.predecessor.get(&current) {
            vertices.push(pred);
            current = pred;
        }
        if current != self.source {
            return None;
        }
        vertices.reverse();

        // Recover the edge walked between each consecutive vertex pair.
        // The directed pair convention makes this a single ordered lookup.
        let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
        let mut length = 0.0;
        for pair in vertices.windows(2) {
            let edge = self.graph.edge_from_to(pair[0], pair[1])?;
            length += self.graph.edge(edge).map(|e| e.weight()).unwrap_or(0.0);
            edges.push(edge);
        }

        Some(Path {
            vertices,
            edges,
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Node};

    /// Insert a bidirectional link as a directed edge pair.
    fn link(g: &mut WeightedGraph<Node, Link>, u: VertexId, v: VertexId) {
        g.insert_edge(u, v, Link::default());
        g.insert_edge(v, u, Link::default());
    }

    fn reference_network() -> (WeightedGraph<Node, Link>, [VertexId; 4]) {
        let mut g = WeightedGraph::new();
        let a = g.insert_vertex(Node::new("A", 0.0, 0.0));
        let b = g.insert_vertex(Node::new("B", 0.0, 4.0));
        let c = g.insert_vertex(Node::new("C", 0.0, 12.0));
        let d = g.insert_vertex(Node::new("D", 3.0, 8.0));
        link(&mut g, a, b);
        link(&mut g, b, d);
        link(&mut g, d, c);
        (g, [a, b, c, d])
    }

    #[test]
    fn distances_match_hand_computed_values() {
        let (g, [a, b, c, d]) = reference_network();
        let sssp = ShortestPaths::solve(&g, a);

        assert_eq!(sssp.distance(a), Some(0.0));
        assert_eq!(sssp.distance(b), Some(4.0));
        assert_eq!(sssp.distance(d), Some(9.0));
        assert_eq!(sssp.distance(c), Some(14.0));
    }

    #[test]
    fn path_reconstruction_yields_vertices_edges_and_length() {
        let (g, [a, _, c, _]) = reference_network();
        let sssp = ShortestPaths::solve(&g, a);

        let path = sssp.path_to(c).unwrap();
        let names: Vec<&str> = path
            .vertices
            .iter()
            .map(|&v| g.vertex(v).unwrap().name())
            .collect();
        assert_eq!(names, vec!["A", "B", "D", "C"]);
        assert_eq!(path.hops(), 3);
        assert!((path.length - 14.0).abs() < 1e-9);
    }

    #[test]
    fn path_to_source_is_the_trivial_path() {
        let (g, [a, ..]) = reference_network();
        let sssp = ShortestPaths::solve(&g, a);

        let path = sssp.path_to(a).unwrap();
        assert_eq!(path.vertices, vec![a]);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn unreachable_destination_reports_no_path() {
        let (mut g, [a, ..]) = reference_network();
        let isolated = g.insert_vertex(Node::new("Z", 50.0, 50.0));
        let sssp = ShortestPaths::solve(&g, a);

        assert_eq!(sssp.distance(isolated), None);
        assert!(sssp.path_to(isolated).is_none());
    }

    #[test]
    fn direction_convention_is_honored() {
        // A single directed edge A -> B is not usable from B.
        let mut g = WeightedGraph::new();
        let a = g.insert_vertex(Node::new("A", 0.0, 0.0));
        let b = g.insert_vertex(Node::new("B", 1.0, 0.0));
        g.insert_edge(a, b, Link::default());

        let from_a = ShortestPaths::solve(&g, a);
        assert_eq!(from_a.distance(b), Some(1.0));

        let from_b = ShortestPaths::solve(&g, b);
        assert!(from_b.path_to(a).is_none());
    }

    /// Cross-check distances against exhaustive simple-path enumeration
    /// on random graphs of at most six vertices.
    #[test]
    fn matches_brute_force_on_small_random_graphs() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let n = rng.gen_range(2..=6);
            let mut g: WeightedGraph<Node, Link> = WeightedGraph::new();
            let mut ids = Vec::new();
            for i in 0..n {
                let x = rng.gen_range(0.0..50.0);
                let y = rng.gen_range(0.0..50.0);
                ids.push(g.insert_vertex(Node::new(format!("N{i}"), x, y)));
            }
            for _ in 0..(2 * n) {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                if u != v {
                    link(&mut g, ids[u], ids[v]);
                }
            }

            let sssp = ShortestPaths::solve(&g, ids[0]);
            for &dest in &ids {
                let expected = brute_force_distance(&g, ids[0], dest);
                match (sssp.distance(dest), expected) {
                    (Some(got), Some(want)) => {
                        assert!((got - want).abs() < 1e-9, "got {got}, want {want}")
                    }
                    (None, None) => {}
                    (got, want) => panic!("reachability mismatch: {got:?} vs {want:?}"),
                }
            }
        }
    }

    fn brute_force_distance(
        g: &WeightedGraph<Node, Link>,
        source: VertexId,
        dest: VertexId,
    ) -> Option<f64> {
        fn dfs(
            g: &WeightedGraph<Node, Link>,
            current: VertexId,
            dest: VertexId,
            visited: &mut Vec<VertexId>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if current == dest {
                if best.map(|b| cost < b).unwrap_or(true) {
                    *best = Some(cost);
                }
                return;
            }
            for &e in g.incident_edges(current) {
                let Some((from, to)) = g.end_vertices(e) else {
                    continue;
                };
                if from != current || visited.contains(&to) {
                    continue;
                }
                visited.push(to);
                let w = g.edge(e).unwrap().weight();
                dfs(g, to, dest, visited, cost + w, best);
                visited.pop();
            }
        }

        let mut best = None;
        let mut visited = vec![source];
        dfs(g, source, dest, &mut visited, 0.0, &mut best);
        best
    }
}
