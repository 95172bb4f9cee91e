pub mod aircraft_info_get;
pub mod request_common;
pub mod states_all_get;
pub mod token_post;
