pub mod array;
pub mod filtered;
pub mod indexed;
pub mod mapped;
pub mod take;
