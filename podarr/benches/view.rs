// SPDX-License-Identifier: Apache-2.0

use std::collections::LinkedList;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use podarr::{Arr, AsView};
use podarr::view::{self, copy_view, copy_view_into};

const COUNT: usize = 8192;

fn borrow(c: &mut Criterion) {
	let arr = Arr::from_exact(0..COUNT as u32);
	c.bench_function("borrow view", |b| b.iter(||
		view::view(black_box(&arr)).iter().sum::<u32>()
	));
}

fn copy(c: &mut Criterion) {
	let list: LinkedList<u32> = (0..COUNT as u32).collect();
	let mut group = c.benchmark_group("copy view");

	group.bench_function("as_view", |b| b.iter(||
		black_box(&list).as_view().len()
	));
	group.bench_function("allocated", |b| b.iter(||
		copy_view(black_box(&list).iter().copied())
	));

	let mut target = vec![0; COUNT];
	group.bench_function("into target", |b| b.iter(||
		copy_view_into(black_box(&list).iter().copied(), &mut target).unwrap()
	));
	group.finish();
}

criterion_group!(benches, borrow, copy);
criterion_main!(benches);
