mod common;
mod pipeline;
mod stats;
mod workbench;
