pub use compute::*;

mod compute;
