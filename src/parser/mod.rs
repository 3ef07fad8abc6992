pub mod csv_table;
pub mod header;
pub mod record;

pub use csv_table::*;
pub use header::*;
pub use record::*;
