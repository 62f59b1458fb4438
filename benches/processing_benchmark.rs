use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pointmap::processors::{color_for, Pipeline};
use pointmap::readers::PointReader;
use pointmap::settings::MapSettings;
use pointmap::writers::{LeafletDocument, MemorySurface};

// Synthetic dataset around Kuala Lumpur; every 50th row has a bad latitude
fn create_test_csv(rows: usize) -> String {
    let mut text = String::from("lat,lng,value\n");
    for i in 0..rows {
        let lat = if i % 50 == 0 {
            "n/a".to_string()
        } else {
            format!("{:.4}", 3.0 + (i as f64) * 0.0001)
        };
        let lng = 101.5 + (i as f64 % 100.0) * 0.001;
        let value = (i % 120) as f64 / 10.0;
        text.push_str(&format!("{},{:.4},{:.1}\n", lat, lng, value));
    }
    text
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for rows in [100, 1_000, 10_000] {
        let text = create_test_csv(rows);
        group.bench_with_input(BenchmarkId::new("read_points", rows), &text, |b, text| {
            b.iter(|| {
                let reader = PointReader::new();
                black_box(reader.read_points(text).count())
            })
        });
    }

    group.finish();
}

fn benchmark_color_mapping(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| i as f64 / 80.0 - 1.0).collect();

    c.bench_function("color_for", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(color_for(black_box(v)));
            }
        })
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let settings = MapSettings::default();
    let text = create_test_csv(10_000);

    group.bench_function("memory_surface", |b| {
        b.iter(|| {
            let pipeline = Pipeline::new(settings.clone());
            let mut surface = MemorySurface::new();
            black_box(pipeline.process_text(&text, &mut surface))
        })
    });

    group.bench_function("leaflet_document", |b| {
        b.iter(|| {
            let pipeline = Pipeline::new(settings.clone());
            let mut document = LeafletDocument::new(&settings);
            pipeline.process_text(&text, &mut document);
            black_box(document.render_html().map(|html| html.len()).unwrap_or(0))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_color_mapping,
    benchmark_pipeline
);
criterion_main!(benches);
