pub mod ident;

pub use ident::*;
