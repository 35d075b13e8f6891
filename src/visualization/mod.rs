pub mod canvas;
pub mod gradient;
pub mod bitmap;
pub mod stars;
pub mod render;
