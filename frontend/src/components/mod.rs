pub mod capture_section;
pub mod header;
pub mod preview_area;
pub mod results;
pub mod server_field;
pub mod utils;
