use serde::{Deserialize, Serialize};

use crate::{handle_field_ref, media_type::MediaType, resource::Dto, Result};

/// Bandwidth-limit rule of a QoS policy: caps throughput (`maxKbps`) and
/// burst size (`maxBurstKb`) of the traffic the policy is applied to.
///
/// Values are not validated on the client; the API rejects bad ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct QosRuleBwLimit {
    /// Rule id, assigned by the caller or the server.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Id of the owning QoS policy.
    #[serde(rename = "policyId", skip_serializing_if = "Option::is_none")]
    policy_id: Option<String>,

    /// Upper bound on throughput in kbps.
    #[serde(rename = "maxKbps", skip_serializing_if = "Option::is_none")]
    max_kbps: Option<i32>,

    /// Upper bound on burst size in kb.
    #[serde(rename = "maxBurstKb", skip_serializing_if = "Option::is_none")]
    max_burst_kb: Option<i32>,

    /// readOnly: true
    #[serde(rename = "uri", skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

impl Dto for QosRuleBwLimit {
    const MEDIA_TYPE: MediaType = MediaType::QosRuleBwLimit;

    fn self_uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

impl QosRuleBwLimit {
    pub fn get_id(&self) -> Result<&str> {
        handle_field_ref(&self.id, "id").map(String::as_str)
    }

    pub fn get_policy_id(&self) -> Result<&str> {
        handle_field_ref(&self.policy_id, "policyId").map(String::as_str)
    }

    pub fn get_max_kbps(&self) -> Result<i32> {
        handle_field_ref(&self.max_kbps, "maxKbps").copied()
    }

    pub fn get_max_burst_kb(&self) -> Result<i32> {
        handle_field_ref(&self.max_burst_kb, "maxBurstKb").copied()
    }

    pub fn get_uri(&self) -> Result<&str> {
        handle_field_ref(&self.uri, "uri").map(String::as_str)
    }

    pub fn id<S: AsRef<str>>(&mut self, id: S) -> &mut Self {
        self.id = Some(id.as_ref().into());
        self
    }

    pub fn policy_id<S: AsRef<str>>(&mut self, id: S) -> &mut Self {
        self.policy_id = Some(id.as_ref().into());
        self
    }

    pub fn max_kbps(&mut self, kbps: i32) -> &mut Self {
        self.max_kbps = Some(kbps);
        self
    }

    pub fn max_burst_kb(&mut self, kb: i32) -> &mut Self {
        self.max_burst_kb = Some(kb);
        self
    }
}
