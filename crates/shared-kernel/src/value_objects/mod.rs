pub mod counts;

pub use counts::LineCount;
