pub mod checkpoint;
pub mod collector;
pub mod context;
pub mod poller;
pub mod script;
