pub mod caption;
pub mod filter;
pub mod geometry;
pub mod guard;
pub mod locate;
pub mod normalize;
pub mod parse;
pub mod plan;
pub mod rasterize;
pub mod serialize;
pub mod simplify;
