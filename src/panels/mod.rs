pub mod selection_ui;

pub use selection_ui::SelectionPanel;
