use criterion::{criterion_group, criterion_main, Criterion};
use stegamix_core::lsb_codec::encode;
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

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = carrier_image();
    let secret_message = "Hello World!";

    c.bench_function("Image Encoding", |b| {
        b.iter(|| encode(&plain_image, secret_message, 1).expect("Cannot hide secret message"))
    });
    c.bench_function("Image Encoding at bit depth 4", |b| {
        b.iter(|| encode(&plain_image, secret_message, 4).expect("Cannot hide secret message"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
