pub mod archive;
pub mod compute_context;
pub mod configuration;
pub mod url_components;
