pub mod cli;
pub mod collab;
pub mod conf;
pub mod logging;
pub mod request;
