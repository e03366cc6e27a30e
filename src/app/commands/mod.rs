pub mod deploy;
pub mod history;
