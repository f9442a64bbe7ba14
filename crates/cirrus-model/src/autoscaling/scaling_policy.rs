//! Scaling policy and alarm records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::{Fields, List};

/// A CloudWatch alarm attached to a scaling policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alarm {
    /// The name of the alarm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,

    /// The Amazon Resource Name (ARN) of the alarm.
    #[serde(rename = "AlarmARN", default, skip_serializing_if = "Option::is_none")]
    pub alarm_arn: Option<String>,
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)?
            .field("AlarmName", self.alarm_name.as_deref())?
            .field("AlarmARN", self.alarm_arn.as_deref())?
            .finish()
    }
}

/// A scaling policy attached to an Auto Scaling group.
///
/// Every member is optional on the wire. Construct with a struct literal:
///
/// ```
/// use cirrus_model::PolicyRecord;
///
/// let policy = PolicyRecord {
///     policy_name: Some("scale-out".to_string()),
///     scaling_adjustment: Some(2),
///     ..Default::default()
/// };
/// assert_eq!(policy.to_string(), "{PolicyName: scale-out,ScalingAdjustment: 2}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyRecord {
    /// The name of the Auto Scaling group the policy belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,

    /// The name of the scaling policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,

    /// The number of instances by which to scale. Interpretation depends on
    /// `adjustment_type`; a positive value adds capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,

    /// `ChangeInCapacity`, `ExactCapacity` or `PercentChangeInCapacity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,

    /// Seconds after a scaling activity before the next one can start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,

    /// The Amazon Resource Name (ARN) of the policy.
    #[serde(rename = "PolicyARN", default, skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,

    /// Alarms that trigger this policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,

    /// Minimum instance count change when `adjustment_type` is
    /// `PercentChangeInCapacity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_adjustment_step: Option<i32>,
}

impl fmt::Display for PolicyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)?
            .field("AutoScalingGroupName", self.auto_scaling_group_name.as_deref())?
            .field("PolicyName", self.policy_name.as_deref())?
            .field("ScalingAdjustment", self.scaling_adjustment)?
            .field("AdjustmentType", self.adjustment_type.as_deref())?
            .field("Cooldown", self.cooldown)?
            .field("PolicyARN", self.policy_arn.as_deref())?
            .field("Alarms", self.alarms.as_deref().map(List))?
            .field("MinAdjustmentStep", self.min_adjustment_step)?
            .finish()
    }
}
