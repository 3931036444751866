use nalgebra::{DMatrix, DVector};

use crate::graph::Graph;

/// Materialize the sparse adjacency structure as a dense square matrix.
///
/// The eigensolver operates on a contiguous buffer, so the CSR storage is
/// expanded row by row into a zero-initialized `DMatrix` of order
/// `graph.len()`.
pub fn adjacency_matrix(graph: &Graph) -> DMatrix<f64> {
    let order = graph.len();
    let mut dense = DMatrix::zeros(order, order);
    for (row, row_vector) in graph.graph_csr.outer_iterator().enumerate() {
        for (column, weight) in row_vector.iter() {
            dense[(row, column)] = *weight;
        }
    }
    dense
}

/// The degree matrix: vertex degrees on the diagonal, zero elsewhere.
pub fn degree_matrix(graph: &Graph) -> DMatrix<f64> {
    DMatrix::from_diagonal(&DVector::from_row_slice(&graph.degrees()))
}

/// The graph Laplacian `L = D - A`.
///
/// Every row of the result sums to zero and the matrix is symmetric, which
/// makes its spectrum real and non-negative.
pub fn laplacian_matrix(graph: &Graph) -> DMatrix<f64> {
    let laplacian = degree_matrix(graph) - adjacency_matrix(graph);
    debug_assert!(laplacian
        .row_iter()
        .all(|row| row.sum().abs() < 1e-9));
    laplacian
}
