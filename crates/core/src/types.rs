/// Track ids are plain signed integers, assigned by the store starting at 1.
pub type DbId = i64;
