mod book;
mod schema;

pub use self::{book::*, schema::*};
