use serde::{Deserialize, Serialize};

use crate::{handle_field_ref, media_type::MediaType, resource::Dto, Result};

/// A named set of QoS rules that can be attached to ports and networks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct QosPolicy {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Whether tenants other than the owner may use the policy.
    #[serde(rename = "shared", skip_serializing_if = "Option::is_none")]
    shared: Option<bool>,

    /// readOnly: true
    #[serde(rename = "uri", skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

impl Dto for QosPolicy {
    const MEDIA_TYPE: MediaType = MediaType::QosPolicy;

    fn self_uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

impl QosPolicy {
    pub fn get_id(&self) -> Result<&str> {
        handle_field_ref(&self.id, "id").map(String::as_str)
    }

    pub fn get_name(&self) -> Result<&str> {
        handle_field_ref(&self.name, "name").map(String::as_str)
    }

    pub fn get_description(&self) -> Result<&str> {
        handle_field_ref(&self.description, "description").map(String::as_str)
    }

    pub fn get_shared(&self) -> Result<bool> {
        handle_field_ref(&self.shared, "shared").copied()
    }

    pub fn id<S: AsRef<str>>(&mut self, id: S) -> &mut Self {
        self.id = Some(id.as_ref().into());
        self
    }

    pub fn name<S: AsRef<str>>(&mut self, name: S) -> &mut Self {
        self.name = Some(name.as_ref().into());
        self
    }

    pub fn description<S: AsRef<str>>(&mut self, description: S) -> &mut Self {
        self.description = Some(description.as_ref().into());
        self
    }

    pub fn shared(&mut self, shared: bool) -> &mut Self {
        self.shared = Some(shared);
        self
    }
}
