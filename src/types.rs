pub const RECORD_SIZE: usize = 8;
pub type Offset = u64;
pub type Position = u64;
