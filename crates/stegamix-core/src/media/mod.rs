pub mod adapter;
pub mod image;

pub use self::adapter::{
    from_rectangular_image, read_image_file, to_rectangular_image, write_image_file,
    write_image_to,
};
pub use self::image::{Image, Pixel, Row, CHANNELS};
