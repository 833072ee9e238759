use log::*;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod media_type;
pub mod models;
pub mod resource;
pub mod transport;
pub use crate::auth::Auth;
pub use crate::error::{Error, Result};
pub use crate::media_type::MediaType;
pub use crate::resource::{Dto, Resource};
pub use crate::transport::Transport;

#[doc(hidden)]
pub(crate) fn handle_entry<T: Clone>(option: &Option<T>, name: &'static str) -> Result<T> {
    option.clone().ok_or_else(|| {
        let msg = format!("Missing {name} entry");
        error!("{msg}");
        Error::Config(msg)
    })
}

#[doc(hidden)]
pub(crate) fn handle_field_ref<'a, T>(field: &'a Option<T>, name: &'static str) -> Result<&'a T> {
    field.as_ref().ok_or_else(|| {
        debug!("Field {name} read before it was set");
        Error::MissingField(name)
    })
}
