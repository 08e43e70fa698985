pub mod document;
pub mod media_type;
pub mod operation;
pub mod path;
pub mod request_body;
pub mod response;
