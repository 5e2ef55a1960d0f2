//! Smooth page scrolling.
//!
//! `timing` holds the pure time helpers, `animation` the controller that
//! batches key presses into eased scroll animations. Easing curves and the
//! scroll settings come from `gyanify_core`.

pub mod animation;
pub mod timing;

pub use animation::PageScroller;
