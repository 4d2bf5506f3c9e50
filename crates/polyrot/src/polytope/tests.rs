//! Topology and metric checks for the three families.

use super::*;
use crate::cfg::DIST_EPS;
use nalgebra::{dvector, DVector};

fn assert_no_duplicates(edges: &[Edge]) {
    for (i, e) in edges.iter().enumerate() {
        assert!(e.a != e.b, "self-edge at {i}");
        for f in &edges[i + 1..] {
            assert!(e != f, "duplicate edge {e:?}");
        }
    }
}

#[test]
fn edge_equality_ignores_orientation() {
    let a = dvector![0.5, -0.5];
    let b = dvector![0.5, 0.5];
    let c = dvector![-0.5, 0.5];
    let e = Edge::new(a.clone(), b.clone());
    assert_eq!(e, Edge::new(b.clone(), a.clone()));
    assert_ne!(e, Edge::new(a, c.clone()));
    assert_ne!(e, Edge::new(c, b));
}

#[test]
fn cube_edge_counts() {
    assert_eq!(cube_edges(2).unwrap().len(), 4);
    assert_eq!(cube_edges(3).unwrap().len(), 12);
    assert_eq!(cube_edges(4).unwrap().len(), 32);
    for d in 2..=7 {
        let edges = cube_edges(d).unwrap();
        assert_eq!(edges.len(), d * (1 << (d - 1)));
        assert_eq!(edges.len(), ShapeKind::Cube.expected_edges(d));
    }
}

#[test]
fn cube_edges_are_unit_axis_steps() {
    for d in 2..=5 {
        let edges = cube_edges(d).unwrap();
        assert_no_duplicates(&edges);
        for e in &edges {
            assert!(e.a.iter().chain(e.b.iter()).all(|x| x.abs() == 0.5));
            let diff = &e.b - &e.a;
            assert_eq!(diff.iter().filter(|x| **x != 0.0).count(), 1);
            assert_eq!(diff.sum(), 1.0);
        }
        let poly = generate_polytope(d, ShapeKind::Cube).unwrap();
        assert_eq!(poly.vertices().len(), 1 << d);
    }
}

#[test]
fn cube_first_edges_follow_product_order() {
    let edges = cube_edges(3).unwrap();
    // direction 0, remaining coords (-,-) then (-,+)
    assert_eq!(edges[0].a, dvector![-0.5, -0.5, -0.5]);
    assert_eq!(edges[0].b, dvector![0.5, -0.5, -0.5]);
    assert_eq!(edges[1].a, dvector![-0.5, -0.5, 0.5]);
    // direction 1 starts after 4 edges
    assert_eq!(edges[4].a, dvector![-0.5, -0.5, -0.5]);
    assert_eq!(edges[4].b, dvector![-0.5, 0.5, -0.5]);
}

#[test]
fn cross_edge_counts_and_no_antipodes() {
    assert_eq!(cross_edges(3).unwrap().len(), 12);
    assert_eq!(cross_edges(4).unwrap().len(), 24);
    for d in 2..=7 {
        let edges = cross_edges(d).unwrap();
        assert_eq!(edges.len(), 2 * d * (d - 1));
        assert_no_duplicates(&edges);
        for e in &edges {
            assert!(e.a != -&e.b, "antipodal edge {e:?}");
            assert!((e.length() - 2f64.sqrt()).abs() < 1e-12);
        }
    }
}

#[test]
fn cross_vertices_are_signed_axes() {
    let vs = cross_vertices(3).unwrap();
    assert_eq!(vs.len(), 6);
    assert_eq!(vs[0], dvector![1.0, 0.0, 0.0]);
    assert_eq!(vs[1], dvector![-1.0, 0.0, 0.0]);
    assert!(vs.iter().all(|v| (v.norm() - 1.0).abs() < 1e-15));
}

#[test]
fn simplex_counts() {
    for d in 2..=7 {
        let vs = simplex_vertices(d).unwrap();
        assert_eq!(vs.len(), d + 1);
        let edges = simplex_edges(d).unwrap();
        assert_eq!(edges.len(), (d + 1) * d / 2);
        assert_eq!(edges.len(), ShapeKind::Simplex.expected_edges(d));
        let poly = generate_polytope(d, ShapeKind::Simplex).unwrap();
        assert_eq!(poly.vertices().len(), d + 1);
    }
}

#[test]
fn simplex_is_regular_with_unit_edges() {
    for d in 2..=7 {
        let vs = simplex_vertices(d).unwrap();
        for i in 0..vs.len() {
            for j in i + 1..vs.len() {
                let dist = (&vs[i] - &vs[j]).norm();
                assert!((dist - 1.0).abs() < DIST_EPS, "d={d} ({i},{j}) dist={dist}");
            }
        }
        let centroid = vs.iter().fold(DVector::zeros(d), |acc, v| acc + v) / (d + 1) as f64;
        assert!(centroid.norm() < 1e-12);
    }
}

#[test]
fn simplex_first_vertex_on_axis() {
    let vs = simplex_vertices(2).unwrap();
    let r = (2.0f64 / 6.0).sqrt();
    assert!((vs[0][0] - r).abs() < 1e-12);
    assert_eq!(vs[0][1], 0.0);
}

#[test]
fn generators_reject_low_dimension() {
    for kind in ShapeKind::ALL {
        assert!(matches!(
            generate_polytope(1, kind),
            Err(EngineError::InvalidDimension { dimension: 1, min: 2 })
        ));
        assert!(generate_polytope(0, kind).is_err());
    }
    assert!(simplex_vertices(1).is_err());
    assert!(cross_vertices(0).is_err());
}

#[test]
fn selection_dispatches_on_kind() {
    for d in 2..=6 {
        for kind in ShapeKind::ALL {
            let p = generate_polytope(d, kind).unwrap();
            assert_eq!(p.kind, kind);
            assert_eq!(p.dimension, d);
            assert_eq!(p.edge_count(), kind.expected_edges(d));
            assert!(p.edges.iter().all(|e| e.a.len() == d && e.b.len() == d));
        }
    }
}

#[test]
fn regeneration_is_identical() {
    for kind in ShapeKind::ALL {
        assert_eq!(
            generate_polytope(5, kind).unwrap(),
            generate_polytope(5, kind).unwrap()
        );
    }
}

#[test]
fn shape_kind_parses_names() {
    assert_eq!("cube".parse::<ShapeKind>().unwrap(), ShapeKind::Cube);
    assert_eq!(" Cross ".parse::<ShapeKind>().unwrap(), ShapeKind::Cross);
    assert_eq!("orthoplex".parse::<ShapeKind>().unwrap(), ShapeKind::Cross);
    assert_eq!("simplex".parse::<ShapeKind>().unwrap(), ShapeKind::Simplex);
    assert!("dodecahedron".parse::<ShapeKind>().is_err());
    for kind in ShapeKind::ALL {
        assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
    }
}
