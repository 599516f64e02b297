use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use image::{Rgb, RgbImage};
use sleepchart_rs::sleep_chart::palette::{BASELINE_GRAY, GRID_GRAY, N1_COLOR, N2_COLOR, N3_COLOR, REM_COLOR};
use sleepchart_rs::sleep_chart::{ExtractionConfig, SleepStageExtractor};
use std::io::Cursor;

fn generate_mock_chart(width: u32, height: u32) -> RgbImage {
    let baseline = height - height / 4;
    let mut image = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    for x in 0..width {
        image.put_pixel(x, baseline, BASELINE_GRAY);
    }
    for x in (0..width).step_by(120) {
        for y in 0..baseline / 2 {
            image.put_pixel(x, y, GRID_GRAY);
        }
    }
    for x in 1..width {
        match (x / 37) % 5 {
            0 => image.put_pixel(x, baseline, N1_COLOR),
            1 => image.put_pixel(x, baseline, N2_COLOR),
            2 => image.put_pixel(x, baseline, N3_COLOR),
            3 => image.put_pixel(x, baseline - 3, REM_COLOR),
            _ => {}
        }
    }
    image
}

fn benchmark_extraction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_size");
    
    let sizes = vec![
        (600, 200, "600x200"),
        (1200, 400, "1200x400"),
        (2400, 800, "2400x800"),
    ];
    
    for (width, height, label) in sizes {
        let chart = generate_mock_chart(width, height);
        
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &chart,
            |b, chart| {
                let extractor = SleepStageExtractor::new(ExtractionConfig::default());
                
                b.iter(|| {
                    let _ = extractor.extract_image(black_box(chart));
                });
            },
        );
    }
    
    group.finish();
}

fn benchmark_decode_and_extract(c: &mut Criterion) {
    let chart = generate_mock_chart(1200, 400);
    let mut png = Cursor::new(Vec::new());
    chart
        .write_to(&mut png, image::ImageFormat::Png)
        .expect("encode benchmark chart");
    let png = png.into_inner();

    c.bench_function("decode_and_extract_png", |b| {
        let extractor = SleepStageExtractor::default();
        b.iter(|| {
            let _ = extractor.extract(black_box(&png));
        });
    });
}

criterion_group!(benches, benchmark_extraction_sizes, benchmark_decode_and_extract);
criterion_main!(benches);
