// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate semgraph;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_yaml;
extern crate fnv;
extern crate itertools;
#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate prettytable;

pub mod errors;
pub mod settings;
pub mod evaluation_metrics;
pub mod prelude;
