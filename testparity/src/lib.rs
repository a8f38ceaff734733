pub mod args;
pub mod logging;
pub mod render;
pub mod run;
pub mod scan;
