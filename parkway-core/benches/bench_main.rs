use chrono::Utc;
use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;
use hashbrown::HashMap;

use parkway_core::feed::WaitSnapshot;
use parkway_core::model::{ParkGraph, ParkModel, ParkModelMeta};
use parkway_core::routing::plan;

fn demo_model() -> ParkModel {
    let attractions = [
        ("Entrance", 0.0, 0.0),
        ("Hollywood Rip Ride Rockit", 2.0, 5.0),
        ("Revenge of the Mummy", 5.0, 8.0),
        ("Transformers", 6.0, 4.0),
        ("Harry Potter Diagon Alley", 8.0, 9.0),
        ("Simpsons Ride", 9.0, 3.0),
        ("Men in Black", 7.0, 1.0),
        ("E.T. Adventure", 4.0, 2.0),
    ];
    let walkways = [
        ("Entrance", "Hollywood Rip Ride Rockit", 5),
        ("Entrance", "E.T. Adventure", 7),
        ("Hollywood Rip Ride Rockit", "Revenge of the Mummy", 6),
        ("Hollywood Rip Ride Rockit", "Transformers", 5),
        ("Revenge of the Mummy", "Harry Potter Diagon Alley", 4),
        ("Transformers", "Simpsons Ride", 8),
        ("Simpsons Ride", "Men in Black", 3),
        ("Men in Black", "E.T. Adventure", 5),
        ("Transformers", "Revenge of the Mummy", 4),
        ("Harry Potter Diagon Alley", "Simpsons Ride", 6),
    ];

    let graph = ParkGraph::from_parts(
        attractions
            .iter()
            .map(|&(name, x, y)| (name.to_string(), Point::new(x, y)))
            .collect(),
        walkways
            .iter()
            .map(|&(a, b, walk)| (a.to_string(), b.to_string(), walk))
            .collect(),
    )
    .unwrap();
    ParkModel::new(graph, ParkModelMeta::default())
}

fn bench_plan(c: &mut Criterion) {
    let model = demo_model();
    let mut waits = HashMap::new();
    for (name, minutes) in [
        ("Entrance", 0),
        ("Hollywood Rip Ride Rockit", 45),
        ("Revenge of the Mummy", 30),
        ("Transformers", 60),
        ("Harry Potter Diagon Alley", 90),
        ("Simpsons Ride", 25),
        ("Men in Black", 15),
        ("E.T. Adventure", 10),
    ] {
        waits.insert(name.to_string(), minutes);
    }
    let snapshot = WaitSnapshot::new(waits, 10, Utc::now());

    c.bench_function("plan entrance to diagon alley", |b| {
        b.iter(|| plan(&model, &snapshot, "Entrance", "Harry Potter Diagon Alley").unwrap())
    });
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
