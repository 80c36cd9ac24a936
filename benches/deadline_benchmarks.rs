//! Performance benchmarks for the business-hours engine.
//!
//! Measures the deadline walk for short, multi-day and multi-week durations,
//! and a full request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use business_hours::api::{AppState, create_router};
use business_hours::config::ConfigLoader;
use business_hours::models::parse_timestamp;

use axum::{body::Body, http::Request};
use chrono::Duration;
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/sample").expect("Failed to load config")
}

/// Benchmarks the deadline walk for increasing durations.
fn bench_deadline_walk(c: &mut Criterion) {
    let calendar = load_config().into_calendar();
    let start = parse_timestamp("Dec 20, 2010 9:00 AM").unwrap();

    let mut group = c.benchmark_group("deadline_walk");
    for hours in [2i64, 40, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(hours), &hours, |b, &hours| {
            b.iter(|| {
                calendar
                    .calculate_deadline(black_box(Duration::hours(hours)), black_box(start))
                    .unwrap()
            })
        });
    }
    group.finish();
}

/// Benchmarks a full `/deadline` request through the router.
fn bench_api_request(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "start": "Jun 8, 2010 2:48 PM",
        "duration_hours": "12.5"
    })
    .to_string();

    c.bench_function("api_deadline_request", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/deadline")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap()
            }
        })
    });
}

criterion_group!(benches, bench_deadline_walk, bench_api_request);
criterion_main!(benches);
