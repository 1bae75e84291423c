pub mod badges;
pub mod list_states;
pub mod loading_indicator;
pub mod toast_display;

pub use badges::*;
pub use list_states::*;
pub use loading_indicator::*;
pub use toast_display::*;
