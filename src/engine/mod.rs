pub mod raster;
pub use raster::{Raster, Snapshot};

pub mod stroke;

pub mod style;
pub use style::*;

mod surface;
pub use surface::*;
