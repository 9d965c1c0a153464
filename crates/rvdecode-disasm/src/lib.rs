pub mod model;
pub mod sweep;

// Re-export commonly used types/functions for consumers
pub use model::{is_mapped, load_raw_bin, read_u16, read_u32, read_u8, Image, Segment};
pub use sweep::{sweep_range, Row, RowKind, Sweep};
