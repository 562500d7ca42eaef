pub mod banner;
pub mod lights;
pub mod tree;
