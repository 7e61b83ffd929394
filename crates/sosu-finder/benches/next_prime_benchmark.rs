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
use sosu_finder::find_next_prime_with;
use sosu_model::number::ValidatedNumber;
use sosu_search::strategy::Strategy;
use std::hint::black_box;

/// Inputs whose next prime is reached quickly enough to measure in a loop.
const INPUTS: [u64; 5] = [10, 7_900, 1_000_000, 1_000_000_000, 1_000_000_000_000];

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_prime");

    for n in INPUTS {
        let number = ValidatedNumber::from(n);
        let digits = number.input_len();
        group.throughput(Throughput::Elements(1));

        for strategy in [Strategy::FixedPrecision, Strategy::ArbitraryPrecision] {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("{digits} digits")),
                &number,
                |b, number| {
                    b.iter(|| {
                        let result = find_next_prime_with(black_box(number), strategy)
                            .unwrap_or_else(|e| panic!("search above {number} failed: {e}"));
                        black_box(result.into_prime())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
