pub mod stdio_ui;

pub use stdio_ui::{pump_inbound_lines, pump_outbound_lines};
