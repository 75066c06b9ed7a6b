//! Animations driven by the run loop.

mod shimmer;

pub use shimmer::Shimmer;
