//! Helpers for end-to-end tests: a `web` server child process and a
//! headless Chrome driver.

pub mod browser;
pub mod test_server;
