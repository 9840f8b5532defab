//! Terminal front end for the RAG recommenders: renderers, logging setup and
//! the interactive prompt loop. `src/bin/main.rs` wires them to the command line.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod interactive;
pub mod logging;
pub mod render;
