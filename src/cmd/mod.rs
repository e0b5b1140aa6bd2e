pub mod bulk;
pub mod features;
pub mod pair;
pub mod train;
