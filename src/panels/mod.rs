mod central_panel;
mod dialogs;
mod menu_bar;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::{error_window, AboutDialog, CanvasSizeDialog};
pub use menu_bar::menu_bar;
pub use tools_panel::tools_panel;
