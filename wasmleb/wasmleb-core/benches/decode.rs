use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wasmleb_core::{decode_signed, decode_unsigned, decode_unsigned_slice, Cursor, IoSource};

/// Concatenated ULEB128 encodings of 0, 1, 2, ... n-1.
fn uleb_stream(n: u64) -> Vec<u8> {
    let mut out = Vec::new();
    for mut v in 0..n {
        loop {
            let byte = (v & 0x7f) as u8;
            v >>= 7;
            if v == 0 {
                out.push(byte);
                break;
            }
            out.push(byte | 0x80);
        }
    }
    out
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("uleb32_cursor");
    for &n in &[1_000u64, 100_000, 1_000_000] {
        let data = uleb_stream(n);
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut cur = Cursor::new(data);
                let mut acc = 0u64;
                while !cur.is_eof() {
                    if let Ok((v, _)) = decode_unsigned(&mut cur, 32) {
                        acc = acc.wrapping_add(v);
                    }
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_io(c: &mut Criterion) {
    let data = uleb_stream(100_000);
    c.bench_function("uleb32_io_100k", |b| {
        b.iter(|| {
            let mut src = IoSource::new(&data[..]);
            let mut acc = 0u64;
            while let Ok((v, _)) = decode_unsigned(&mut src, 32) {
                acc = acc.wrapping_add(v);
            }
            black_box(acc);
        })
    });
}

fn bench_widths(c: &mut Criterion) {
    let u64_max: [u8; 10] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
    let i64_min: [u8; 10] = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F];
    c.bench_function("uleb64_max", |b| {
        b.iter(|| black_box(decode_unsigned_slice(black_box(&u64_max), 64)))
    });
    c.bench_function("sleb64_min", |b| {
        b.iter(|| black_box(decode_signed(&mut Cursor::new(black_box(&i64_min)), 64)))
    });
}

criterion_group!(benches, bench_cursor, bench_io, bench_widths);
criterion_main!(benches);
