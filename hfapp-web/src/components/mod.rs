mod config_screen;
mod text_input;

pub use config_screen::ConfigScreen;
pub use text_input::TextInputView;
