mod generic_path;
pub use generic_path::Path;
