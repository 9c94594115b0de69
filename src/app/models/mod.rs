pub mod api_error;
pub mod json_from_request;
pub mod message;
pub mod path_from_request;
