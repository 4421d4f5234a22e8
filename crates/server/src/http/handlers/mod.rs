pub mod analyse;
pub mod docs;
