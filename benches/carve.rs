// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};
use seamcarve::{image_energy, seam_finder, Algorithm, CarveConfig, Orientation, SeamCarver};

fn textured(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 7 + y * 3) % 256) as u8,
            ((x * x + y) % 256) as u8,
            ((x * y) % 256) as u8,
        ])
    })
}

fn bench_find_seam(c: &mut Criterion) {
    let image = textured(64, 48);
    let energy = match image_energy(&image) {
        Ok(energy) => energy,
        Err(_) => return,
    };

    let mut group = c.benchmark_group("find_seam");
    for algorithm in &[Algorithm::Greedy, Algorithm::DynamicProgramming, Algorithm::GraphCut] {
        let finder = seam_finder(&CarveConfig::default().with_algorithm(*algorithm));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", algorithm)),
            &energy,
            |b, energy| b.iter(|| finder.find_seam(black_box(energy), Orientation::Vertical)),
        );
    }
    group.finish();
}

fn bench_carve_to(c: &mut Criterion) {
    let image = textured(80, 40);
    c.bench_function("carve 80 to 70", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(image.clone());
            black_box(carver.carve_to(70, Orientation::Vertical, |_, _| ()).ok())
        })
    });
}

criterion_group!(benches, bench_find_seam, bench_carve_to);
criterion_main!(benches);
