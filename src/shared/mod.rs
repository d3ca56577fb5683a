pub mod dates;
pub mod normalize;
