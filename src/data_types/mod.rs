pub mod attribute;
pub mod config;
pub mod record;
pub mod value;

pub use attribute::*;
pub use config::*;
pub use record::*;
pub use value::*;
