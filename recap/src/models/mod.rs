mod action_item;
mod analysis;

pub use action_item::*;
pub use analysis::*;
