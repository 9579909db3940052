use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use geoturf::{
	FeatureOptions, GeoCollection, GeoFeature,
	bbox::{BBoxOptions, bbox},
	clip::bbox_clip,
	meta::{CoordEachOptions, coord_each, segment_each},
	polygon,
};
use std::{hint::black_box, ops::ControlFlow};

const RING_SIZE: usize = 10_000;

fn circle(n: usize, radius: f64) -> GeoFeature {
	let mut ring: Vec<[f64; 2]> = (0..n)
		.map(|i| {
			let a = i as f64 / n as f64 * std::f64::consts::TAU;
			[radius * a.cos(), radius * a.sin()]
		})
		.collect();
	ring.push(ring[0]);
	polygon(vec![ring], FeatureOptions::default()).unwrap()
}

fn collection() -> GeoCollection {
	GeoCollection::from((1..=100).map(|r| circle(RING_SIZE / 100, f64::from(r))).collect::<Vec<_>>())
}

fn bench_coord_each(c: &mut Criterion) {
	let input = collection();
	c.bench_function("coord_each", |b| {
		b.iter(|| {
			let mut sum = 0.0;
			coord_each(&input, CoordEachOptions::default(), |p, _| {
				sum += p.x();
				ControlFlow::Continue(())
			})
			.unwrap();
			black_box(sum)
		})
	});
}

fn bench_segment_each(c: &mut Criterion) {
	let input = collection();
	c.bench_function("segment_each", |b| {
		b.iter(|| {
			let mut count = 0usize;
			segment_each(&input, |_, _| {
				count += 1;
				ControlFlow::Continue(())
			})
			.unwrap();
			black_box(count)
		})
	});
}

fn bench_bbox(c: &mut Criterion) {
	let input = collection();
	c.bench_function("bbox", |b| b.iter(|| black_box(bbox(&input, BBoxOptions::default()).unwrap())));
}

fn bench_bbox_clip(c: &mut Criterion) {
	let input = circle(RING_SIZE, 10.0);
	c.bench_function("bbox_clip", |b| {
		b.iter_batched(
			|| [-5.0, -5.0, 5.0, 12.0],
			|window| black_box(bbox_clip(&input, &window).unwrap()),
			BatchSize::SmallInput,
		)
	});
}

criterion_group!(benches, bench_coord_each, bench_segment_each, bench_bbox, bench_bbox_clip);
criterion_main!(benches);
