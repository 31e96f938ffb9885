// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use saferint_checked::evaluate::evaluate;
use saferint_checked::integer::CheckedInteger;
use saferint_checked::operation::Operation;
use saferint_checked::policy::error::SilentPolicy;
use saferint_checked::policy::result::{NativeResult, SaturatingResult};
use saferint_core::num::convert::{int8_from_int32, uint32_from_int64};
use std::hint::black_box;

const LEN: usize = 4096;

/// Deterministic operands that overflow roughly once in eight additions.
fn operands() -> Vec<(i32, i32)> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..LEN)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let a = (state >> 32) as i32;
            let b = (state as i32) >> 2;
            (a, b)
        })
        .collect()
}

fn bench_addition(c: &mut Criterion) {
    let pairs = operands();
    let mut group = c.benchmark_group("addition");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function("native_wrapping", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0i32, |acc, &(x, y)| acc ^ black_box(x).wrapping_add(black_box(y)))
        })
    });

    group.bench_function("checked_native_result", |b| {
        b.iter(|| {
            pairs.iter().fold(0i32, |acc, &(x, y)| {
                let x = CheckedInteger::<i32, NativeResult, SilentPolicy>::new(black_box(x));
                acc ^ (x + black_box(y)).get()
            })
        })
    });

    group.bench_function("checked_saturating_result", |b| {
        b.iter(|| {
            pairs.iter().fold(0i32, |acc, &(x, y)| {
                let x = CheckedInteger::<i32, SaturatingResult, SilentPolicy>::new(black_box(x));
                acc ^ (x + black_box(y)).get()
            })
        })
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let pairs = operands();
    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(LEN as u64));

    for op in [Operation::Add, Operation::Multiply, Operation::Divide] {
        group.bench_with_input(BenchmarkId::from_parameter(op.name()), &op, |b, &op| {
            b.iter(|| {
                pairs.iter().fold(0i32, |acc, &(x, y)| {
                    acc ^ evaluate::<NativeResult, i32>(op, black_box(x), black_box(y)).value
                })
            })
        });
    }

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let pairs = operands();
    let mut group = c.benchmark_group("conversion");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function("int8_from_int32", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0i8, |acc, &(x, _)| acc ^ int8_from_int32(black_box(x)).value)
        })
    });

    group.bench_function("uint32_from_int64", |b| {
        b.iter(|| {
            pairs.iter().fold(0u32, |acc, &(x, y)| {
                let wide = (x as i64) << 8 | y as i64;
                acc ^ uint32_from_int64(black_box(wide)).value
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_addition, bench_evaluate, bench_conversion);
criterion_main!(benches);
