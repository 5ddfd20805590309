//! Benchmark: table construction and factory invocation per build mode

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use reinhardt_dom::prelude::*;

fn benchmark_build(c: &mut Criterion) {
	c.bench_function("build_html_table_development", |b| {
		b.iter(|| FactoryTable::html(black_box(BuildMode::Development)).unwrap())
	});
	c.bench_function("build_html_table_production", |b| {
		b.iter(|| FactoryTable::html(black_box(BuildMode::Production)).unwrap())
	});
}

fn benchmark_create(c: &mut Criterion) {
	let dev = FactoryTable::html(BuildMode::Development).unwrap();
	let prod = FactoryTable::html(BuildMode::Production).unwrap();

	let descriptor = || {
		Descriptor::new()
			.attr("class", "item")
			.attr("data-id", "42")
			.child("Hello")
	};

	c.bench_function("create_div_development", |b| {
		b.iter(|| dev.create(black_box("div"), descriptor()).unwrap())
	});
	c.bench_function("create_div_production", |b| {
		b.iter(|| prod.create(black_box("div"), descriptor()).unwrap())
	});
}

criterion_group!(benches, benchmark_build, benchmark_create);
criterion_main!(benches);
