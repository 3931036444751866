// This file has code from https://github.com/LIHPC-Computational-Geometry/coupe

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator};
use rayon::iter::ParallelIterator as _;
use rustc_hash::FxHashSet;
use std::iter::{Cloned, Zip};
use std::slice::Iter;
use ::sprs::{CsMat, TriMat};

/// Struct that represents an undirected graph
pub struct Graph{
    /// The CsMat (from sprs) is used to store the graph as a sparse matrix in CSR format
    pub graph_csr: CsMat<f64>
}

impl Graph {

    /// Create a new graph with no vertices.
    pub fn new() -> Self {
        Self {
            graph_csr: CsMat::empty(sprs::CSR, 0)
        }
    }

    /// Build the adjacency matrix of a graph with `node_count` vertices from
    /// an edge list.
    ///
    /// Edges are undirected: each pair is normalized and deduplicated before
    /// being inserted symmetrically with weight 1, so repeated lines in an
    /// input file cannot inflate entries. Vertices that appear in no edge are
    /// kept as empty rows and the matrix stays square of order `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut unique_edges = FxHashSet::default();
        for &(vertex1, vertex2) in edges {
            debug_assert!(vertex1 < node_count && vertex2 < node_count);
            debug_assert_ne!(vertex1, vertex2);
            unique_edges.insert((vertex1.min(vertex2), vertex1.max(vertex2)));
        }

        let mut triplet_matrix =
            TriMat::with_capacity((node_count, node_count), 2 * unique_edges.len());
        for &(vertex1, vertex2) in &unique_edges {
            triplet_matrix.add_triplet(vertex1, vertex2, 1.0);
            triplet_matrix.add_triplet(vertex2, vertex1, 1.0);
        }

        Self {
            graph_csr: triplet_matrix.to_csr()
        }
    }

    /// The number of vertices in the graph.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.graph_csr.rows(), self.graph_csr.cols());
        self.graph_csr.rows()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator over the neighbors of the given vertex.
    pub fn neighbors(&self, vertex: usize) -> Zip<Cloned<Iter<'_, usize>>, Cloned<Iter<'_, f64>>> {
        let (indices, data) = self.graph_csr.outer_view(vertex).unwrap().into_raw_storage();
        indices.iter().cloned().zip(data.iter().cloned())
    }

    /// Get edge weight for a pair of vertices.
    pub fn get_edge_weight(&self, vertex1: usize, vertex2: usize) -> Option<f64> {
        self.graph_csr.get(vertex1, vertex2).cloned()
    }

    /// The degree of each vertex, i.e. the row sums of the adjacency matrix.
    pub fn degrees(&self) -> Vec<f64> {
        self.graph_csr
            .outer_iterator()
            .map(|row| row.iter().map(|(_neighbor, weight)| *weight).sum())
            .collect()
    }

    /// The edge cut of a partition.
    ///
    /// Given a partition, the edge cut is the total weight of the edges that
    /// link graph vertices of different parts. All edges here have a weight
    /// of 1, so this is the number of edges crossing between the communities.
    pub fn edge_cut(&self, partition: &[usize]) -> f64
    {
        debug_assert_eq!(self.len(), partition.len());

        let indptr = self.graph_csr.indptr().into_raw_storage();
        let indices = self.graph_csr.indices();
        let data = self.graph_csr.data();
        indptr
            .par_iter()
            .zip(&indptr[1..])
            .enumerate()
            .map(|(vertex, (start, end))| {
                let neighbors = &indices[*start..*end];
                let edge_weights = &data[*start..*end];
                let vertex_part = partition[vertex];
                neighbors
                    .iter()
                    .zip(edge_weights)
                    .take_while(|(neighbor, _edge_weight)| **neighbor < vertex)
                    .filter(|(neighbor, _edge_weight)| vertex_part != partition[**neighbor])
                    .map(|(_neighbor, edge_weight)| *edge_weight)
                    .sum::<f64>()
            })
            .sum()
    }
}
