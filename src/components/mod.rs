mod hand_writing;
pub use hand_writing::*;

mod panel;
pub use panel::*;

mod brush_setting;
pub use brush_setting::*;

mod toolbar;
pub use toolbar::*;

mod preview;
pub use preview::*;
