pub mod checkerboard;
pub mod colorkey;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
