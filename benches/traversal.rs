use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scenery_graph::{
    Direction, EndItem, LineItem, Point, Scenery, SimulationOptions, TrackItem, TrackItemId, TrackItems,
    TrackStruct, Topology,
};

const LINE_COUNT: u32 = 10_000;

/// `E1 - L2 - ... - L(n+1) - E(n+2)`
fn long_line() -> Scenery {
    let id = TrackItemId;
    let last = LINE_COUNT + 2;
    let mut items: Vec<TrackItem> = Vec::with_capacity(last as usize);

    items.push(EndItem::new(TrackStruct::new(id(1), "E1", Point::new(0.0, 0.0)).with_links(None, Some(id(2)))).into());
    for n in 2..last {
        let x = f64::from(n - 2) * 10.0;
        items.push(
            LineItem::new(
                TrackStruct::new(id(n), format!("L{n}"), Point::new(x, 0.0))
                    .with_links(Some(id(n - 1)), Some(id(n + 1)))
                    .with_real_length(100.0),
                Point::new(x + 10.0, 0.0),
            )
            .into(),
        );
    }
    items.push(
        EndItem::new(
            TrackStruct::new(id(last), "E", Point::new(f64::from(LINE_COUNT) * 10.0, 0.0))
                .with_links(Some(id(last - 1)), None),
        )
        .into(),
    );

    Scenery::bind(items, SimulationOptions::default()).expect("benchmark layout binds")
}

fn benchmark_traversal(c: &mut Criterion) {
    let scenery = long_line();

    c.bench_function("following_item", |b| {
        let line = scenery.item(TrackItemId(500)).expect("line exists");
        let previous = scenery.item(TrackItemId(499)).expect("line exists");
        b.iter(|| line.following_item(black_box(&scenery), black_box(previous), Direction::Forward));
    });

    c.bench_function("walk_whole_line", |b| {
        b.iter(|| {
            scenery
                .walk(TrackItemId(2), TrackItemId(1), Direction::Forward)
                .expect("items exist")
                .filter_map(Result::ok)
                .map(TrackItem::real_length)
                .sum::<f64>()
        });
    });

    c.bench_function("connected_components", |b| {
        b.iter(|| black_box(&scenery).connected_components());
    });
}

criterion_group!(benches, benchmark_traversal);
criterion_main!(benches);
