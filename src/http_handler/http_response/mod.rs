pub mod response_common;
pub mod states;
pub mod token;
