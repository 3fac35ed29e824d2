pub mod response;
pub mod transaction;
pub mod webhook;

pub use response::*;
pub use transaction::*;
pub use webhook::*;
