pub mod qos_policy;
pub mod qos_rule_bw_limit;
pub mod qos_rule_dscp;

pub use qos_policy::QosPolicy;
pub use qos_rule_bw_limit::QosRuleBwLimit;
pub use qos_rule_dscp::QosRuleDscp;

/// Fresh random id for a resource the caller is about to create.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
