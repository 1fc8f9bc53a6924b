#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use lecodec::prelude::*;

const N_ROWS: usize = 2000;

#[derive(Plain, Debug, Clone, Copy)]
struct Row {
    id: u32,
    live: bool,
    delta: i64,
    weight: f64,
}

fn rows() -> Vec<u8> {
    let mut out = Vec::with_capacity(N_ROWS * Row::WIDTH);
    for i in 0..N_ROWS {
        Row {
            id: i as u32,
            live: i % 2 == 0,
            delta: -(i as i64),
            weight: i as f64 * 0.5,
        }
        .ser_plain(&mut out);
    }
    out
}

fn bench_dec_strict(c: &mut Criterion) {
    let enc = rows();
    c.bench_function(
        &format!("Strictly decoding {} rows, input size of {} bytes", N_ROWS, enc.len()),
        move |b| {
            b.iter(|| {
                let d = &mut LeBytes::from(black_box(&enc[..]));
                (0..N_ROWS)
                    .map(|_| Row::de_plain(d))
                    .collect::<Result<Vec<Row>, Error>>()
                    .unwrap()
            })
        },
    );
}

fn bench_dec_tuple(c: &mut Criterion) {
    let enc = rows();
    c.bench_function("Strictly decoding a row as a tuple", move |b| {
        b.iter(|| decode::<(u32, bool, i64, f64)>(black_box(&enc)).unwrap())
    });
}

fn bench_dec_into(c: &mut Criterion) {
    let enc = rows();
    c.bench_function("Decoding a row into existing slots", move |b| {
        b.iter(|| {
            let (mut id, mut live, mut delta, mut weight) = (0u32, false, 0i64, 0f64);
            decode_into(
                black_box(&enc),
                &mut [&mut id, &mut live, &mut delta, &mut weight],
            )
            .unwrap();
            (id, live, delta, weight)
        })
    });
}

fn bench_dec_lenient(c: &mut Criterion) {
    let enc = rows();
    c.bench_function(
        &format!("Leniently decoding {} u64 fields", enc.len() / 8),
        move |b| {
            b.iter(|| {
                black_box(&enc)
                    .chunks(8)
                    .map(decode_u64)
                    .fold(0u64, u64::wrapping_add)
            })
        },
    );
}

criterion_group!(
    benches,
    bench_dec_strict,
    bench_dec_tuple,
    bench_dec_into,
    bench_dec_lenient
);
criterion_main!(benches);
