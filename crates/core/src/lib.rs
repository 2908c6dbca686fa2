pub mod audio;
pub mod catalog;
pub mod shared;
