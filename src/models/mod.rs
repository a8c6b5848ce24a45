mod record;

pub use record::{Record, Shift, TatStatus};
