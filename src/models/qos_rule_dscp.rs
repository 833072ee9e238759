use serde::{Deserialize, Serialize};

use crate::{handle_field_ref, media_type::MediaType, resource::Dto, Result};

/// DSCP-marking rule of a QoS policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct QosRuleDscp {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "policyId", skip_serializing_if = "Option::is_none")]
    policy_id: Option<String>,

    /// DSCP value written into matching packets.
    #[serde(rename = "dscpMark", skip_serializing_if = "Option::is_none")]
    dscp_mark: Option<i32>,

    /// readOnly: true
    #[serde(rename = "uri", skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

impl Dto for QosRuleDscp {
    const MEDIA_TYPE: MediaType = MediaType::QosRuleDscp;

    fn self_uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

impl QosRuleDscp {
    pub fn get_id(&self) -> Result<&str> {
        handle_field_ref(&self.id, "id").map(String::as_str)
    }

    pub fn get_policy_id(&self) -> Result<&str> {
        handle_field_ref(&self.policy_id, "policyId").map(String::as_str)
    }

    pub fn get_dscp_mark(&self) -> Result<i32> {
        handle_field_ref(&self.dscp_mark, "dscpMark").copied()
    }

    pub fn id<S: AsRef<str>>(&mut self, id: S) -> &mut Self {
        self.id = Some(id.as_ref().into());
        self
    }

    pub fn policy_id<S: AsRef<str>>(&mut self, id: S) -> &mut Self {
        self.policy_id = Some(id.as_ref().into());
        self
    }

    pub fn dscp_mark(&mut self, mark: i32) -> &mut Self {
        self.dscp_mark = Some(mark);
        self
    }
}
