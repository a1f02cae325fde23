use crate::media::{Image, Row};

/// the 3x2 carrier used throughout the docs, 18 bits of capacity at bit depth 1
pub fn prepare_3x2_image() -> Image {
    Image::from(vec![
        vec![[15, 103, 255], [0, 3, 19]],
        vec![[22, 200, 1], [8, 8, 8]],
        vec![[0, 0, 0], [5, 123, 19]],
    ])
}

/// an image where every channel value is different, large enough to carry row and column tags
pub fn prepare_gradient_image(width: usize, height: usize) -> Image {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    [
                        (x * 7 + y * 3) as u8,
                        (x * 13 + y * 29) as u8,
                        (x * y + 101) as u8,
                    ]
                })
                .collect::<Row>()
        })
        .collect()
}
