//! Performance benchmarks for the webhook hot path
//!
//! Run with: cargo bench
//! Or for specific benchmarks: cargo bench -- <filter>

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use voicegate::core::speech::{TranscriptionRequest, TranscriptionResponse};
use voicegate::core::twiml::ResponseDocument;

/// Recording sizes in bytes: 1s, 3s and 5s of 8kHz 16-bit mono
const CLIP_SIZES: [usize; 3] = [16_000, 48_000, 80_000];

/// Benchmark building and encoding the recognition request
fn bench_request_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_encoding");
    group.measurement_time(Duration::from_secs(5));

    for size in CLIP_SIZES {
        let audio: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("linear16", size), &audio, |b, audio| {
            b.iter(|| {
                let request = TranscriptionRequest::new(black_box(audio));
                black_box(request.to_json())
            });
        });
    }

    group.finish();
}

/// Benchmark decoding a response and picking the outcome document
fn bench_response_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_decoding");

    let body = br#"{"results":[{"alternatives":[{"transcript":"testing 1 2 3","confidence":0.98},{"transcript":"testing 123","confidence":0.41}]}]}"#;

    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("first_alternative", |b| {
        b.iter(|| {
            let document = TranscriptionResponse::from_slice(black_box(body))
                .and_then(TranscriptionResponse::into_transcript)
                .map(|t| ResponseDocument::for_transcript(&t));
            black_box(document)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_request_encoding, bench_response_decoding);
criterion_main!(benches);
