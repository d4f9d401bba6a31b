pub mod args;
pub mod fetch;
pub mod git;
pub mod logging;
pub mod process;
pub mod run;
pub mod store;

#[cfg(test)]
mod fakes;
