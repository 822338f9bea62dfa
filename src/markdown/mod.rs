pub mod toc;
pub mod types;

pub use toc::generate_toc;
