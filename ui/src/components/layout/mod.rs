pub mod dialog_frame;
pub mod section_grid;

pub use dialog_frame::*;
pub use section_grid::*;
