pub use load::*;

mod load;
