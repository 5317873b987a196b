// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The min-cut seam finder
//!
//! Every pixel is a node of a flow network.  On every line the last
//! offset hangs off the source and the first offset drains into the
//! sink, both with unlimited capacity.  Along a line, the edge from
//! offset `o` back to `o − 1` carries the (shifted) energy of pixel
//! `o`; the edges forward to `o + 1`, on this line and on the two
//! neighbouring lines, are unlimited.
//!
//! The unlimited edges mean that whatever the source side of a finite
//! cut is, it holds a suffix `[s, span)` of every line, and that
//! neighbouring lines' suffixes start at most one apart.  The cut then
//! crosses exactly one energy edge per line, the one leaving pixel
//! `s`, so the minimum cut is the cheapest connected seam and `s` (the
//! first source-side node on the line) is the pixel to remove.
//!
//! The energies are shifted so that the cheapest pixel costs
//! `min_capacity`.  Every seam has the same number of pixels, so the
//! shift doesn't change which one is cheapest, and masked (negative)
//! energies still make usable capacities.  Offset 0 is never chosen.

use crate::orientation::{Lines, Orientation};
use crate::seamfinder::SeamFinder;
use crate::twodmap::EnergyMap;
use log::debug;
use std::collections::VecDeque;

// Residual capacities below this are treated as saturated.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    capacity: f64,
}

/// A directed flow network with residual edges, solved with Dinic's
/// algorithm.  Edge `e` and its residual twin live at `e` and `e ^ 1`.
#[derive(Debug, Default)]
pub struct FlowNetwork {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(nodes: usize) -> Self {
        FlowNetwork {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); nodes],
        }
    }

    pub fn nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, capacity: f64) {
        let index = self.edges.len();
        self.edges.push(Edge { to, capacity });
        self.edges.push(Edge { to: from, capacity: 0.0 });
        self.adjacency[from].push(index);
        self.adjacency[to].push(index + 1);
    }

    // Breadth-first distances from the source over unsaturated edges.
    fn levels(&self, source: usize) -> Vec<Option<usize>> {
        let mut level = vec![None; self.nodes()];
        let mut queue = VecDeque::new();
        level[source] = Some(0);
        queue.push_back(source);
        while let Some(node) = queue.pop_front() {
            let next = level[node].map(|l| l + 1);
            for &e in &self.adjacency[node] {
                let edge = self.edges[e];
                if edge.capacity > EPSILON && level[edge.to].is_none() {
                    level[edge.to] = next;
                    queue.push_back(edge.to);
                }
            }
        }
        level
    }

    // Find one source-to-sink path in the level graph and push as much
    // as it allows.  Iterative, so that long seams don't blow the stack.
    fn augment(
        &mut self,
        source: usize,
        sink: usize,
        level: &[Option<usize>],
        cursor: &mut [usize],
    ) -> f64 {
        let mut path: Vec<usize> = Vec::new();
        let mut node = source;
        loop {
            if node == sink {
                let bottleneck = path
                    .iter()
                    .map(|&e| self.edges[e].capacity)
                    .fold(f64::INFINITY, f64::min);
                for &e in &path {
                    self.edges[e].capacity -= bottleneck;
                    self.edges[e ^ 1].capacity += bottleneck;
                }
                return bottleneck;
            }

            let mut advanced = false;
            while cursor[node] < self.adjacency[node].len() {
                let e = self.adjacency[node][cursor[node]];
                let edge = self.edges[e];
                let deeper = match (level[node], level[edge.to]) {
                    (Some(here), Some(there)) => there == here + 1,
                    _ => false,
                };
                if edge.capacity > EPSILON && deeper {
                    path.push(e);
                    node = edge.to;
                    advanced = true;
                    break;
                }
                cursor[node] += 1;
            }

            if !advanced {
                // Dead end: back up one edge and never try it again
                // in this phase.
                match path.pop() {
                    Some(e) => {
                        node = self.edges[e ^ 1].to;
                        cursor[node] += 1;
                    }
                    None => return 0.0,
                }
            }
        }
    }

    /// Push the maximum flow from `source` to `sink`, returning its value.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> f64 {
        let mut flow = 0.0;
        loop {
            let level = self.levels(source);
            if level[sink].is_none() {
                return flow;
            }
            let mut cursor = vec![0; self.nodes()];
            loop {
                let pushed = self.augment(source, sink, &level, &mut cursor);
                if pushed <= EPSILON {
                    break;
                }
                flow += pushed;
            }
        }
    }

    /// After `max_flow`, the nodes still reachable from the source: the
    /// source side of a minimum cut.
    pub fn source_side(&self, source: usize) -> Vec<bool> {
        self.levels(source).into_iter().map(|l| l.is_some()).collect()
    }
}

/// The graph-cut strategy.  `min_capacity` is the capacity of the
/// cheapest pixel once energies have been shifted.
#[derive(Debug, Copy, Clone)]
pub struct GraphCut {
    pub min_capacity: f64,
}

impl GraphCut {
    pub fn new(min_capacity: f64) -> Self {
        GraphCut { min_capacity }
    }
}

impl Default for GraphCut {
    fn default() -> Self {
        GraphCut::new(crate::config::DEFAULT_MIN_CAPACITY)
    }
}

impl SeamFinder for GraphCut {
    fn find_seam(&self, energy: &EnergyMap, orientation: Orientation) -> Vec<u32> {
        let lines = Lines::new(energy, orientation);
        let (count, span) = (lines.count(), lines.span());
        let mut seam = vec![0; count as usize];
        // A one-pixel line would tie the source straight to the sink.
        if energy.is_empty() || span < 2 {
            return seam;
        }

        let (count, span) = (count as usize, span as usize);
        let node = |line: usize, offset: usize| line * span + offset;
        let source = count * span;
        let sink = source + 1;
        let floor = energy.min().unwrap_or(0.0);

        let mut network = FlowNetwork::new(count * span + 2);
        for line in 0..count {
            network.add_edge(source, node(line, span - 1), f64::INFINITY);
            network.add_edge(node(line, 0), sink, f64::INFINITY);
            for offset in 0..span {
                let here = node(line, offset);
                if offset > 0 {
                    let cost = lines.get(line as u32, offset as u32) - floor + self.min_capacity;
                    network.add_edge(here, node(line, offset - 1), cost);
                }
                if offset + 1 < span {
                    network.add_edge(here, node(line, offset + 1), f64::INFINITY);
                    if line > 0 {
                        network.add_edge(here, node(line - 1, offset + 1), f64::INFINITY);
                    }
                    if line + 1 < count {
                        network.add_edge(here, node(line + 1, offset + 1), f64::INFINITY);
                    }
                }
            }
        }

        let flow = network.max_flow(source, sink);
        debug!("graph cut over {} lines of {}: flow {:.3}", count, span, flow);

        let reachable = network.source_side(source);
        for (line, entry) in seam.iter_mut().enumerate() {
            *entry = (0..span)
                .find(|&offset| reachable[node(line, offset)])
                .unwrap_or(span - 1) as u32;
        }
        seam
    }
}
