use std::fmt;

use log::error;

use crate::{Error, Result};

/// Vendor media types understood by the MidoNet API for QoS resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Media Type: "application/json".
    Json,
    QosPolicy,
    QosPolicyCollection,
    QosRuleBwLimit,
    QosRuleBwLimitCollection,
    QosRuleDscp,
    QosRuleDscpCollection,
}

impl Default for MediaType {
    /// Default value for MediaType is application/json
    fn default() -> Self {
        Self::Json
    }
}

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_QOS_POLICY_JSON: &str = "application/vnd.org.midonet.qos_policy-v1+json";
pub const APPLICATION_QOS_POLICY_COLLECTION_JSON: &str =
    "application/vnd.org.midonet.collection.qos_policy-v1+json";
pub const APPLICATION_QOS_RULE_BW_LIMIT_JSON: &str =
    "application/vnd.org.midonet.qos_rule_bw_limit-v1+json";
pub const APPLICATION_QOS_RULE_BW_LIMIT_COLLECTION_JSON: &str =
    "application/vnd.org.midonet.collection.qos_rule_bw_limit-v1+json";
pub const APPLICATION_QOS_RULE_DSCP_JSON: &str =
    "application/vnd.org.midonet.qos_rule_dscp-v1+json";
pub const APPLICATION_QOS_RULE_DSCP_COLLECTION_JSON: &str =
    "application/vnd.org.midonet.collection.qos_rule_dscp-v1+json";

impl MediaType {
    /// Parses a byte slice, typically a `Content-Type` header value, into a
    /// MediaType. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `Error::MediaType` when the bytes are empty, not UTF-8, or name
    /// a media type this crate does not know.
    ///
    /// # Examples
    ///
    /// ```
    /// use midonet_client::media_type::MediaType;
    ///
    /// assert!(MediaType::try_from(b"application/json").is_ok());
    /// assert!(MediaType::try_from(b"application/json2").is_err());
    /// ```
    pub fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            error!("Empty media type");
            return Err(Error::MediaType(String::new()));
        }
        let utf8_slice = String::from_utf8(bytes.to_vec()).map_err(|e| {
            error!("Media type is not UTF-8: {e}");
            Error::MediaType(e.to_string())
        })?;
        match utf8_slice.as_str().trim() {
            APPLICATION_JSON => Ok(Self::Json),
            APPLICATION_QOS_POLICY_JSON => Ok(Self::QosPolicy),
            APPLICATION_QOS_POLICY_COLLECTION_JSON => Ok(Self::QosPolicyCollection),
            APPLICATION_QOS_RULE_BW_LIMIT_JSON => Ok(Self::QosRuleBwLimit),
            APPLICATION_QOS_RULE_BW_LIMIT_COLLECTION_JSON => Ok(Self::QosRuleBwLimitCollection),
            APPLICATION_QOS_RULE_DSCP_JSON => Ok(Self::QosRuleDscp),
            APPLICATION_QOS_RULE_DSCP_COLLECTION_JSON => Ok(Self::QosRuleDscpCollection),
            other => {
                error!("Unsupported media type {other}");
                Err(Error::MediaType(other.to_string()))
            }
        }
    }

    /// Returns a static string representation of the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use midonet_client::media_type::MediaType;
    ///
    /// let media_type = MediaType::QosRuleBwLimit;
    /// assert_eq!(
    ///     media_type.as_str(),
    ///     "application/vnd.org.midonet.qos_rule_bw_limit-v1+json"
    /// );
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => APPLICATION_JSON,
            Self::QosPolicy => APPLICATION_QOS_POLICY_JSON,
            Self::QosPolicyCollection => APPLICATION_QOS_POLICY_COLLECTION_JSON,
            Self::QosRuleBwLimit => APPLICATION_QOS_RULE_BW_LIMIT_JSON,
            Self::QosRuleBwLimitCollection => APPLICATION_QOS_RULE_BW_LIMIT_COLLECTION_JSON,
            Self::QosRuleDscp => APPLICATION_QOS_RULE_DSCP_JSON,
            Self::QosRuleDscpCollection => APPLICATION_QOS_RULE_DSCP_COLLECTION_JSON,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_known_media_types() {
        let all = [
            MediaType::Json,
            MediaType::QosPolicy,
            MediaType::QosPolicyCollection,
            MediaType::QosRuleBwLimit,
            MediaType::QosRuleBwLimitCollection,
            MediaType::QosRuleDscp,
            MediaType::QosRuleDscpCollection,
        ];
        for media_type in all {
            let parsed = MediaType::try_from(media_type.as_str().as_bytes()).unwrap();
            assert_eq!(parsed, media_type);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed =
            MediaType::try_from(b" application/vnd.org.midonet.qos_rule_bw_limit-v1+json\r\n")
                .unwrap();
        assert_eq!(parsed, MediaType::QosRuleBwLimit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            MediaType::try_from(b""),
            Err(Error::MediaType(_))
        ));
        assert!(matches!(
            MediaType::try_from(&[0xff, 0xfe]),
            Err(Error::MediaType(_))
        ));
        assert!(matches!(
            MediaType::try_from(b"application/vnd.org.midonet.qos_rule_bw_limit-v2+json"),
            Err(Error::MediaType(_))
        ));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(MediaType::default(), MediaType::Json);
        assert_eq!(
            MediaType::QosRuleBwLimit.to_string(),
            "application/vnd.org.midonet.qos_rule_bw_limit-v1+json"
        );
    }
}
