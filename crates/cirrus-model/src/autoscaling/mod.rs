//! Autoscaling API shapes.
//!
//! [`PolicySetResult`] is the output of a describe-policies call: one page of
//! [`PolicyRecord`]s plus the token for the next page.

mod policy_set;
mod scaling_policy;

pub use policy_set::PolicySetResult;
pub use scaling_policy::{Alarm, PolicyRecord};
