use criterion::{criterion_group, criterion_main, Criterion};
use stegamix_core::lsb_codec::{decode, encode};
use stegamix_core::media::{Image, Row};

fn carrier_image() -> Image {
    (0..256u32)
        .map(|y| {
            (0..256u32)
                .map(|x| [x as u8, y as u8, (x ^ y) as u8])
                .collect::<Row>()
        })
        .collect()
}

pub fn image_decoding(c: &mut Criterion) {
    let secret_image =
        encode(&carrier_image(), "Hello World!", 1).expect("Cannot hide secret message");

    c.bench_function("Image Decoding", |b| {
        b.iter(|| decode(&secret_image, 1).expect("Failed to unveil message"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
