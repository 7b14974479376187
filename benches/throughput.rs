use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use franz::protocol::{handle_request, API_VERSION_TABLE};

fn request_bytes(api_version: u16, correlation_id: u32) -> Vec<u8> {
    let mut req = Vec::new();
    req.extend_from_slice(&8u32.to_be_bytes());
    req.extend_from_slice(&18u16.to_be_bytes());
    req.extend_from_slice(&api_version.to_be_bytes());
    req.extend_from_slice(&correlation_id.to_be_bytes());
    req
}

fn bench_handle_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_request");
    for (name, req) in [
        ("supported", request_bytes(4, 7)),
        ("unsupported", request_bytes(999, 42)),
    ] {
        group.throughput(Throughput::Bytes(req.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &req, |b, req| {
            b.iter(|| handle_request(req, API_VERSION_TABLE).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_handle_request);
criterion_main!(benches);
