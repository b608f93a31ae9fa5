use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brand_colors::{contrast_ratio, extract_branding, PixelBuffer};

/// Synthetic RGBA icon with a saturated glyph over a gray gradient.
fn synthetic_icon(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let in_glyph = x > size / 4 && x < 3 * size / 4 && y > size / 4 && y < 3 * size / 4;
            if in_glyph {
                data.extend_from_slice(&[53, 132, 228, 255]);
            } else {
                let shade = ((x + y) * 255 / (2 * size)) as u8;
                data.extend_from_slice(&[shade, shade, shade, 255]);
            }
        }
    }
    data
}

fn benchmark_extraction(c: &mut Criterion) {
    for size in [64u32, 256, 1024] {
        let data = synthetic_icon(size);
        let rowstride = size as usize * 4;
        c.bench_function(&format!("extract_branding_{size}x{size}"), |b| {
            b.iter(|| {
                let buffer = PixelBuffer::new(size, size, rowstride, 4, &data).unwrap();
                black_box(extract_branding(&buffer))
            })
        });
    }
}

fn benchmark_contrast(c: &mut Criterion) {
    c.bench_function("contrast_ratio_hex", |b| {
        b.iter(|| black_box(contrast_ratio(black_box("#3584e4"), black_box("#ffffff"))))
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_contrast);
criterion_main!(benches);
