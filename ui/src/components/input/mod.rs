pub mod blood_group_select;
pub mod validated_input;

pub use blood_group_select::*;
pub use validated_input::*;
