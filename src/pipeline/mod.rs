pub mod collect;
pub mod emit;
