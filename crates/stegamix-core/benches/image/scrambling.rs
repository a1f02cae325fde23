use criterion::{criterion_group, criterion_main, Criterion};
use stegamix_core::media::{Image, Row};
use stegamix_core::Scrambler;

fn plain_image() -> Image {
    (0..256u32)
        .map(|y| {
            (0..256u32)
                .map(|x| [x as u8, y as u8, (x ^ y) as u8])
                .collect::<Row>()
        })
        .collect()
}

pub fn image_scrambling(c: &mut Criterion) {
    let image = plain_image();
    let mut scrambler = Scrambler::with_seed(42);

    c.bench_function("Image Scrambling", |b| {
        b.iter(|| scrambler.scramble(&image).expect("Failed to scramble image"))
    });

    let scrambled = scrambler.scramble(&image).expect("Failed to scramble image");
    c.bench_function("Image Unscrambling", |b| {
        b.iter(|| Scrambler::unscramble(&scrambled).expect("Failed to unscramble image"))
    });
}

criterion_group!(benches, image_scrambling);
criterion_main!(benches);
