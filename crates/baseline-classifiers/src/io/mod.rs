pub mod panel_csv;

pub use panel_csv::{read_panel, read_panel_with_config, PanelData, PanelReaderConfig};
