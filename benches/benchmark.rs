// This file contains benchmarks for the purpose of guarding against
// performance regressions. To run them, use `cargo bench`.

use static_vec::{
	StaticString,
	StaticVec
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("Performance regression tests");
	group.bench_function("Fill and clear (u64 x 64)", |b| {
		b.iter(|| {
			let mut vec: StaticVec<u64, 64> = StaticVec::new();
			for i in 0..64 {
				vec.emplace_back(|| black_box(i));
			}
			vec.clear();
			vec
		})
	});
	group.bench_function("Fill (String x 16)", |b| {
		b.iter(|| {
			let mut vec: StaticVec<String, 16> = StaticVec::new();
			while vec.emplace_back(|| String::from(black_box("element"))) {}
			vec
		})
	});
	group.bench_function("Clone (String x 16)", |b| {
		let vec: StaticVec<String, 16> = (0..16).map(|i| i.to_string()).collect();
		b.iter(|| black_box(&vec).clone())
	});
	group.bench_function("Take (String x 16)", |b| {
		b.iter(|| {
			let mut source: StaticVec<String, 16> = (0..16).map(|i| i.to_string()).collect();
			StaticVec::take_from(black_box(&mut source))
		})
	});
	group.bench_function("Push str (StaticString<64>)", |b| {
		b.iter(|| {
			let mut s: StaticString<64> = StaticString::new();
			while s.try_push_str(black_box("word ")).is_ok() {}
			s
		})
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
