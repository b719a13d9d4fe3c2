//! Rendered oracles for the structural views.
//!
//! Each test renders a view with `algorithms::as_string` and compares
//! byte-for-byte; the renderings pin down node order, per-node edge order
//! and the edge-enumeration order the views guarantee.

use graphwalk::{algorithms, Augmented, AugmentedGraph, BasicGraph, Checked, Graph, Subgraph, Transposed, Undirected};

fn uvwxyz_graph() -> BasicGraph<&'static str> {
    BasicGraph::from_rows(&[
        &["u", "v", "x"][..],
        &["v", "y"][..],
        &["w", "y", "z"][..],
        &["x", "v"][..],
        &["y", "x"][..],
        &["z", "z"][..],
    ])
}

fn abcdefgh_graph() -> BasicGraph<&'static str> {
    BasicGraph::from_rows(&[
        &["a", "b"][..],
        &["b", "e", "f", "c"][..],
        &["c", "g", "d"][..],
        &["d", "c", "h"][..],
        &["e", "f", "a"][..],
        &["f", "g"][..],
        &["g", "f", "h"][..],
        &["h", "h"][..],
    ])
}

#[test]
fn transposed_uvwxyz_renders_reverse_adjacency() {
    let graph = uvwxyz_graph();
    let augmented = Augmented::new(&graph);
    let transposed = Transposed::new(&augmented);

    assert!(algorithms::augmented_invariant(&transposed));
    assert_eq!(
        algorithms::as_string(&transposed),
        "u;\n\
         v: u[1] x[2];\n\
         w;\n\
         x: u[3] y[4];\n\
         y: v[5] w[6];\n\
         z: w[7] z[8];\n"
    );
    assert!(algorithms::same_nodes_and_edges(&graph, &transposed));
}

#[test]
fn transposed_edges_swap_endpoints_everywhere() {
    let graph = uvwxyz_graph();
    let augmented = Augmented::new(&graph);
    let transposed = Transposed::new(&augmented);

    for edge in algorithms::edges(&graph) {
        assert_eq!(graph.source_of(edge), transposed.target_of(edge));
        assert_eq!(graph.target_of(edge), transposed.source_of(edge));
    }
    for edge in algorithms::edges(&transposed) {
        assert_eq!(transposed.source_of(edge), graph.target_of(edge));
        assert_eq!(transposed.target_of(edge), graph.source_of(edge));
    }
}

#[test]
fn undirected_uvwxyz_renders_synthesized_edges() {
    let graph = uvwxyz_graph();
    let undirected = Undirected::new(&graph);

    assert!(algorithms::invariant(&undirected));
    assert_eq!(
        algorithms::as_string(&undirected),
        "u: v[1] x[2];\n\
         v: y[3] u[4] x[5];\n\
         w: y[6] z[7];\n\
         x: v[8] u[9] y[10];\n\
         y: x[11] v[12] w[13];\n\
         z: z[14] w[15];\n"
    );
}

#[test]
fn undirected_uninverted_recovers_originals() {
    let graph = uvwxyz_graph();
    let undirected = Undirected::new(&graph);
    let original_edges: Vec<_> = algorithms::edges(&graph).cloned().collect();

    for edge in algorithms::edges(&undirected) {
        assert!(original_edges.contains(undirected.uninverted_of(edge)));
    }
}

#[test]
fn restriction_of_abcdefgh() {
    let graph = abcdefgh_graph();
    let restricted = Subgraph::restricted_to_nodes(&graph, &["a", "b", "c", "d"]);

    assert_eq!(
        algorithms::as_string(&restricted),
        "a: b[1];\n\
         b: c[2];\n\
         c: d[3];\n\
         d: c[4];\n"
    );
}

#[test]
fn edge_induced_subgraph_keeps_edge_order() {
    let graph = abcdefgh_graph();
    let picked: Vec<_> = graph
        .edges_from(&"b")
        .iter()
        .chain(graph.edges_from(&"a"))
        .cloned()
        .collect();

    let subgraph = Subgraph::induced_by_edges(&graph, &picked, &["h"]);
    assert_eq!(
        algorithms::as_string(&subgraph),
        "h;\n\
         b: e[1] f[2] c[3];\n\
         e;\n\
         f;\n\
         c;\n\
         a: b[4];\n"
    );
}

#[test]
fn checked_accepts_consistent_views() {
    let graph = uvwxyz_graph();
    let checked = Checked::new(Augmented::new(&graph)).unwrap();

    assert_eq!(checked.nodes(), graph.nodes());
    assert_eq!(checked.edges_to(&"v").len(), 2);
    assert!(checked.is_edge(&graph.edges_from(&"u")[0]));
}
