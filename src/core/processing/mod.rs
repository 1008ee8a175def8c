pub mod crop;
pub mod dispatch;
pub mod grid;
pub mod padding;
