// tokfreq: token frequency tables and random number files
//
// This is the library root shared by the `count-frequency` and `randoms`
// binaries. Each module corresponds to one stage of those tools.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod randoms;
pub mod tokens;
