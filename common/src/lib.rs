//! This library is there to share some common code amongst all tripmeter modules.
//!
//! - logging initialisation (`tracing` + `tracing-tree`)
//! - the generic HCL configuration file loader
//! - version string
//!

mod macros;

mod config;
mod logging;

use clap::{crate_name, crate_version};
pub use config::*;
pub use logging::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(v.starts_with("tripmeter-common/"));
        assert!(v.ends_with(VERSION));
    }
}
