mod book;
mod table;

pub use self::{book::*, table::*};
