pub mod crtsh;

pub use crtsh::CrtShSource;
