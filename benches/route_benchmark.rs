use criterion::{black_box, criterion_group, criterion_main, Criterion};
use env_logger::Env;
use log::warn;
use nanorand::{Rng, WyRand};

use waypoint_pathfinding::prelude::*;

/// A building with `floors` floors of `width * height` Waypoints each, connected by corridors
/// of random length and a staircase in every corner.
fn building_document(width: usize, height: usize, floors: usize, seed: u64) -> String {
    let mut rng = WyRand::new_seed(seed);
    let id = |x: usize, y: usize, z: usize| format!("{}.{}-{}", z, x, y);

    let mut document = String::from("<graphml><graph edgedefault=\"undirected\">\n");
    for z in 0..floors {
        for y in 0..height {
            for x in 0..width {
                document += &format!("<node id=\"{}\"/>\n", id(x, y, z));
            }
        }
    }
    for z in 0..floors {
        for y in 0..height {
            for x in 0..width {
                if x + 1 < width {
                    let weight = rng.generate_range(1_u32..10);
                    document += &format!(
                        "<edge source=\"{}\" target=\"{}\" weight=\"{}\"/>\n",
                        id(x, y, z),
                        id(x + 1, y, z),
                        weight
                    );
                }
                if y + 1 < height {
                    let weight = rng.generate_range(1_u32..10);
                    document += &format!(
                        "<edge source=\"{}\" target=\"{}\" weight=\"{}\"/>\n",
                        id(x, y, z),
                        id(x, y + 1, z),
                        weight
                    );
                }
            }
        }
        if z + 1 < floors {
            for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
                document += &format!(
                    "<edge source=\"{}\" target=\"{}\" weight=\"15\"/>\n",
                    id(x, y, z),
                    id(x, y, z + 1)
                );
            }
        }
    }
    document += "</graph></graphml>\n";
    document
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn") // Change this to debug or trace to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_parse(c: &mut Criterion) {
    init();
    let document = building_document(30, 30, 4, 4);
    warn!("parse benchmark document: {} bytes", document.len());

    c.bench_function("parse 3600 waypoints", |b| {
        b.iter(|| parse_graph(black_box(document.as_bytes())).unwrap())
    });
    c.bench_function("parse and symmetrize 3600 waypoints", |b| {
        b.iter(|| WeightedGraph::from_document(black_box(document.as_bytes())).unwrap())
    });
}

fn bench_search(c: &mut Criterion) {
    init();
    let graph = WeightedGraph::from_document(building_document(30, 30, 4, 4).as_bytes()).unwrap();
    let (start, goal) = ("0.0-0", "3.29-29");

    // every step costs at least 1, a floor change exactly 15
    let floors_apart = |node: &str, goal: &str| -> f64 {
        let floor = |id: &str| id.split('.').next().and_then(|f| f.parse::<f64>().ok());
        match (floor(node), floor(goal)) {
            (Some(a), Some(b)) => (a - b).abs() * 15.0,
            _ => 0.0,
        }
    };

    c.bench_function("find_path across 4 floors (zero heuristic)", |b| {
        b.iter(|| find_path(&graph, black_box(start), black_box(goal), &ZeroHeuristic).unwrap())
    });
    c.bench_function("find_path across 4 floors (floor heuristic)", |b| {
        b.iter(|| find_path(&graph, black_box(start), black_box(goal), &floors_apart).unwrap())
    });

    let goals: Vec<String> = (0..4).map(|z| format!("{}.15-15", z)).collect();
    c.bench_function("find_paths to 4 floors", |b| {
        b.iter(|| find_paths(&graph, black_box(start), &goals, &ZeroHeuristic))
    });
}

fn bench_route(c: &mut Criterion) {
    init();
    let document = building_document(10, 10, 2, 7);
    c.bench_function("route 200 waypoints", |b| {
        b.iter(|| route(black_box(document.as_bytes()), "0.0-0", "1.9-9").unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_search, bench_route);
criterion_main!(benches);
