pub mod component;
pub mod root;

pub use component::*;
pub use root::*;
