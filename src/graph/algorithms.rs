//! Graph traversals and shortest paths for [`Graph`].
//!
//! BFS and DFS are exposed as lazy iterators that yield [`NodeIdx`] handles;
//! both keep their visited state in a dense `Vec<bool>` indexed by arena
//! position. Dijkstra runs over a binary heap of tentative distances.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use num_traits::Zero;

use super::weighted_graph::{Graph, NodeIdx};
use crate::trace::trace_event;

/// An iterator for Breadth-First Search (BFS).
///
/// A node is marked visited when it is enqueued, so no node ever enters the
/// queue twice. Items are [`NodeIdx`] handles stamped with the traversed
/// graph's identity rather than raw indices, so they are accepted by that
/// graph and rejected by any other.
pub struct Bfs<'a, T, W> {
    graph: &'a Graph<T, W>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, T, W> Bfs<'a, T, W> {
    pub(crate) fn new(graph: &'a Graph<T, W>, start: usize) -> Self {
        let len = graph.node_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start < len {
            visited[start] = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, T, W> Iterator for Bfs<'a, T, W> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &(v, _) in self.graph.edges_of(u) {
            if v < self.visited.len() && !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(self.graph.handle(u))
    }
}

/// An iterator for Depth-First Search (DFS) in pre-order.
///
/// Each stack frame is `(node, next_edge)`: the frame resumes scanning its
/// node's edges where it left off once the subtree below has been exhausted.
pub struct Dfs<'a, T, W> {
    graph: &'a Graph<T, W>,
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>,
    pending_start: Option<usize>,
}

impl<'a, T, W> Dfs<'a, T, W> {
    pub(crate) fn new(graph: &'a Graph<T, W>, start: usize) -> Self {
        let len = graph.node_count();
        let mut visited = vec![false; len];
        let mut stack = Vec::new();
        let mut pending_start = None;

        if start < len {
            visited[start] = true;
            stack.push((start, 0));
            pending_start = Some(start);
        }

        Self {
            graph,
            visited,
            stack,
            pending_start,
        }
    }
}

impl<'a, T, W> Iterator for Dfs<'a, T, W> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending_start.take() {
            return Some(self.graph.handle(start));
        }

        while let Some(frame) = self.stack.last_mut() {
            let (u, cursor) = *frame;
            match self.graph.edges_of(u).get(cursor) {
                Some(&(v, _)) => {
                    frame.1 += 1;
                    if v < self.visited.len() && !self.visited[v] {
                        self.visited[v] = true;
                        self.stack.push((v, 0));
                        return Some(self.graph.handle(v));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Heap entry: a tentative distance to `node`.
///
/// Ordered so that `BinaryHeap` pops the smallest cost first and, among equal
/// costs, the lowest arena index.
struct Candidate<W> {
    cost: W,
    node: usize,
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys to turn the max-heap into a min-heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Dijkstra from arena index `start` to `end`.
///
/// Returns the path as arena indices plus its total weight, or `None` if
/// `end` is unreachable. Stops as soon as `end` is settled.
pub(crate) fn dijkstra<T, W>(graph: &Graph<T, W>, start: usize, end: usize) -> Option<(Vec<usize>, W)>
where
    W: Copy + PartialOrd + Zero,
{
    let n = graph.node_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    *dist.get_mut(start)? = Some(W::zero());
    heap.push(Candidate {
        cost: W::zero(),
        node: start,
    });

    while let Some(Candidate { cost, node }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        if node == end {
            break;
        }

        for &(next, weight) in graph.edges_of(node) {
            if next >= n || settled[next] {
                continue;
            }
            let tentative = cost + weight;
            let improves = match dist[next] {
                Some(known) => tentative < known,
                None => true,
            };
            if improves {
                dist[next] = Some(tentative);
                prev[next] = Some(node);
                heap.push(Candidate {
                    cost: tentative,
                    node: next,
                });
            }
        }
    }

    trace_event!(
        debug,
        start,
        end,
        settled = settled.iter().filter(|&&done| done).count(),
        "dijkstra finished"
    );

    let total = (*dist.get(end)?)?;
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = prev[current]?;
        path.push(current);
    }
    path.reverse();
    Some((path, total))
}
