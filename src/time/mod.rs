pub mod holidays;
pub mod reference_file;

pub use holidays::ReferenceData;
pub use reference_file::{load_reference_data, save_reference_data};
