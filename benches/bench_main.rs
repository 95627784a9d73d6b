use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;
use hashbrown::HashMap;

use walkshed::prelude::*;

/// Square grid of streets, `size` nodes per side, ~100 m spacing.
fn grid_network(size: i64) -> NetworkData {
    let spacing = 0.001;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            nodes.push(NetworkNode {
                id,
                lon: -2.24 + col as f64 * spacing,
                lat: 53.43 + row as f64 * spacing,
            });
            if col > 0 {
                edges.push(NetworkEdge {
                    from: id - 1,
                    to: id,
                    weight: None,
                });
            }
            if row > 0 {
                edges.push(NetworkEdge {
                    from: id - size,
                    to: id,
                    weight: None,
                });
            }
        }
    }

    NetworkData { nodes, edges }
}

fn cafe_at(point: Point<f64>) -> Candidate {
    let mut tags = HashMap::new();
    tags.insert("amenity".to_string(), "cafe".to_string());
    Candidate::new(point, tags)
}

fn bench_routing(c: &mut Criterion) {
    let engine = GeodesicEngine::default();
    let streets = create_street_graph(&grid_network(40), &engine).unwrap();
    let origin = streets.nearest_node(Point::new(-2.24, 53.43)).unwrap();
    let target = streets.nearest_node(Point::new(-2.20, 53.47)).unwrap();

    c.bench_function("astar_grid_corner_to_corner", |b| {
        b.iter(|| route(&streets, &engine, origin, target).unwrap())
    });
}

fn bench_walkshed(c: &mut Criterion) {
    let engine = GeodesicEngine::default();
    let streets = create_street_graph(&grid_network(40), &engine).unwrap();
    let origin = Point::new(-2.22, 53.45);
    let config = WalkshedConfig::default();
    let filter = TagEquals::cafes();

    let candidates: Vec<Candidate> = (0..64)
        .map(|i| {
            let col = i % 8;
            let row = i / 8;
            cafe_at(Point::new(
                -2.238 + col as f64 * 0.004,
                53.432 + row as f64 * 0.004,
            ))
        })
        .collect();

    c.bench_function("walkshed_grid_64_candidates", |b| {
        b.iter(|| {
            compute_walkshed(&streets, origin, candidates.clone(), &filter, &config).unwrap()
        })
    });
}

criterion_group!(benches, bench_routing, bench_walkshed);
criterion_main!(benches);
