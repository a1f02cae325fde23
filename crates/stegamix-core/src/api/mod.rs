pub mod hide;
pub mod scramble;
pub mod unscramble;
pub mod unveil;
