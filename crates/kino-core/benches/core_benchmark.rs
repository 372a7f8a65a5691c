//! Benchmark tests for kino-core operations
//!
//! Run with: cargo bench -p kino-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kino_core::{
    detect, EnvironmentInput, PlayerEnvironment, PlayerParams, ServerEndpoints, StaticProbe,
    Tweaks, MIME_HLS, MIME_MP4, MIME_WEBM,
};

// ============================================================================
// Helpers
// ============================================================================

fn sample_environments() -> Vec<(&'static str, EnvironmentInput)> {
    vec![
        (
            "chrome-mac",
            EnvironmentInput::from_user_agent(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
                "MacIntel",
            ),
        ),
        (
            "ipad",
            EnvironmentInput::from_user_agent(
                "Mozilla/5.0 (iPad; CPU OS 11_0 like Mac OS X) AppleWebKit/604.1.34 (KHTML, like Gecko) Version/11.0 Mobile/15A5341f Safari/604.1",
                "iPad",
            ),
        ),
        (
            "android2",
            EnvironmentInput::from_user_agent(
                "Mozilla/5.0 (Linux; U; Android 2.3.6; en-us; Nexus S Build/GRK39F) AppleWebKit/533.1 (KHTML, like Gecko) Version/4.0 Mobile Safari/533.1",
                "Linux armv7l",
            )
            .with_window(480, 800)
            .with_orientation(Some(0)),
        ),
        (
            "ie11",
            EnvironmentInput::from_user_agent(
                "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko",
                "Win32",
            ),
        ),
    ]
}

fn full_probe() -> StaticProbe {
    StaticProbe::playing([MIME_HLS[0], MIME_MP4, MIME_WEBM])
}

// ============================================================================
// Detection Benchmarks
// ============================================================================

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("Capability Detection");
    let probe = full_probe();

    for (name, input) in sample_environments() {
        group.bench_with_input(BenchmarkId::new("detect", name), &input, |b, input| {
            b.iter(|| black_box(detect(black_box(input), &probe)));
        });
    }

    group.finish();
}

fn bench_tweaks(c: &mut Criterion) {
    c.bench_function("Tweaks::parse", |b| {
        b.iter(|| black_box(Tweaks::parse(black_box("android-enable-hls,html5-force-mp4,other"))))
    });
}

// ============================================================================
// Environment Benchmarks
// ============================================================================

fn bench_endpoints(c: &mut Criterion) {
    let params = PlayerParams::default();
    c.bench_function("ServerEndpoints::resolve", |b| {
        b.iter(|| black_box(ServerEndpoints::resolve(black_box(&params), true)))
    });
}

fn bench_player_environment(c: &mut Criterion) {
    let probe = full_probe();
    let (_, input) = sample_environments().remove(0);

    c.bench_function("PlayerEnvironment::load", |b| {
        b.iter(|| {
            black_box(PlayerEnvironment::load(
                input.clone(),
                &probe,
                PlayerParams::default(),
            ))
        })
    });
}

// ============================================================================
// Group Registration
// ============================================================================

criterion_group!(detect_benches, bench_detect, bench_tweaks);

criterion_group!(environment_benches, bench_endpoints, bench_player_environment);

criterion_main!(detect_benches, environment_benches);
