//! Describe-policies result.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PolicyRecord;
use crate::Result;
use crate::constraints::{check_chars, is_token_char};
use crate::render::{Fields, List};

/// One page of scaling policies.
///
/// The policy sequence has three observable states: unset, set but empty,
/// and populated. [`policies`](Self::policies) reads the first two alike,
/// while equality, hashing, rendering and the wire form keep them apart.
///
/// # Example
///
/// ```
/// use cirrus_model::{PolicyRecord, PolicySetResult};
///
/// let page = PolicySetResult::default()
///     .append_policies([PolicyRecord::default(), PolicyRecord::default()])
///     .with_continuation_token(Some("next-page".to_string()));
///
/// assert_eq!(page.policies().len(), 2);
/// assert!(page.has_more());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicySetResult {
    #[serde(rename = "ScalingPolicies", default, skip_serializing_if = "Option::is_none")]
    policies: Option<Vec<PolicyRecord>>,

    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    continuation_token: Option<String>,
}

impl PolicySetResult {
    /// Returns the policies in this page; empty when unset.
    pub fn policies(&self) -> &[PolicyRecord] {
        self.policies.as_deref().unwrap_or_default()
    }

    /// Returns the policy sequence for in-place edits, creating an empty one
    /// if it is unset.
    pub fn policies_mut(&mut self) -> &mut Vec<PolicyRecord> {
        self.policies.get_or_insert_with(Vec::new)
    }

    /// Whether the policy sequence has been set, even to an empty one.
    pub fn has_policies(&self) -> bool {
        self.policies.is_some()
    }

    /// Replace the policy sequence. `None` returns it to the unset state.
    pub fn set_policies(&mut self, policies: Option<Vec<PolicyRecord>>) {
        self.policies = policies;
    }

    /// Replace the policy sequence and return `self` for chaining.
    pub fn with_policies(mut self, policies: Option<Vec<PolicyRecord>>) -> Self {
        self.set_policies(policies);
        self
    }

    /// Append policies, creating the sequence if unset, and return `self` for
    /// chaining.
    pub fn append_policies(mut self, policies: impl IntoIterator<Item = PolicyRecord>) -> Self {
        self.policies_mut().extend(policies);
        self
    }

    /// Returns the token for the next page, if any.
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    /// Set the continuation token. Not validated.
    pub fn set_continuation_token(&mut self, token: Option<String>) {
        self.continuation_token = token;
    }

    /// Set the continuation token and return `self` for chaining.
    pub fn with_continuation_token(mut self, token: Option<String>) -> Self {
        self.set_continuation_token(token);
        self
    }

    /// Whether another page is available.
    pub fn has_more(&self) -> bool {
        self.continuation_token.is_some()
    }

    /// Check the continuation token against its documented character class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// token contains a character outside the allowed ranges.
    pub fn validate(&self) -> Result<()> {
        if let Some(token) = &self.continuation_token {
            check_chars("NextToken", token, is_token_char)?;
        }
        Ok(())
    }

    /// Decode a result from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if the document is not
    /// valid JSON or does not match the shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(json)?;
        debug!(
            policies = result.policies().len(),
            has_more = result.has_more(),
            "decoded policy set"
        );
        Ok(result)
    }

    /// Encode this result in its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for PolicySetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)?
            .field("ScalingPolicies", self.policies.as_deref().map(List))?
            .field("NextToken", self.continuation_token.as_deref())?
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn named(name: &str) -> PolicyRecord {
        PolicyRecord {
            policy_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unset_policies_read_as_empty() {
        let result = PolicySetResult::default();
        assert!(result.policies().is_empty());
        assert!(!result.has_policies());
    }

    #[test]
    fn policies_mut_initializes_sequence() {
        let mut result = PolicySetResult::default();
        assert!(result.policies_mut().is_empty());
        assert!(result.has_policies());
        assert_ne!(result, PolicySetResult::default());
    }

    #[test]
    fn token_only_example() {
        let result = PolicySetResult::default().with_continuation_token(Some("abc".to_string()));
        assert_eq!(result.policies(), &[] as &[PolicyRecord]);
        assert_eq!(result.continuation_token(), Some("abc"));
        assert_eq!(result.to_string(), "{NextToken: abc}");
    }

    #[test]
    fn set_then_get() {
        let mut result = PolicySetResult::default();
        result.set_policies(Some(vec![named("a"), named("b")]));
        assert_eq!(result.policies(), &[named("a"), named("b")]);

        result.set_policies(None);
        assert!(!result.has_policies());

        result.set_continuation_token(Some("t".to_string()));
        assert_eq!(result.continuation_token(), Some("t"));
        result.set_continuation_token(None);
        assert_eq!(result.continuation_token(), None);
    }

    #[test]
    fn append_keeps_order_and_duplicates() {
        let result = PolicySetResult::default()
            .append_policies([named("a"), named("b")])
            .append_policies([named("a")]);
        let names: Vec<_> = result
            .policies()
            .iter()
            .map(|p| p.policy_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, ["a", "b", "a"]);
    }

    #[test]
    fn append_nothing_still_sets_sequence() {
        let result = PolicySetResult::default().append_policies([]);
        assert!(result.has_policies());
        assert!(result.policies().is_empty());
    }

    #[test]
    fn with_matches_setter() {
        let mut by_setter = PolicySetResult::default();
        by_setter.set_policies(Some(vec![named("a")]));
        by_setter.set_continuation_token(Some("next".to_string()));

        let by_with = PolicySetResult::default()
            .with_policies(Some(vec![named("a")]))
            .with_continuation_token(Some("next".to_string()));

        assert_eq!(by_setter, by_with);
        assert_eq!(hash_of(&by_setter), hash_of(&by_with));
    }

    #[test]
    fn with_policies_replaces() {
        let result = PolicySetResult::default()
            .append_policies([named("old")])
            .with_policies(Some(vec![named("new")]));
        assert_eq!(result.policies(), &[named("new")]);
    }

    #[test]
    fn unset_and_empty_are_not_equal() {
        let unset = PolicySetResult::default();
        let empty = PolicySetResult::default().with_policies(Some(vec![]));
        assert_ne!(unset, empty);
        assert_ne!(empty, unset);
        assert_eq!(empty, empty.clone());
    }

    #[test]
    fn display_lists_policies() {
        let result = PolicySetResult::default().append_policies([named("a"), named("b")]);
        assert_eq!(
            result.to_string(),
            "{ScalingPolicies: [{PolicyName: a}, {PolicyName: b}]}"
        );
        assert_eq!(PolicySetResult::default().to_string(), "{}");
    }

    #[test]
    fn validate_token_chars() {
        let ok = PolicySetResult::default().with_continuation_token(Some("abc\tdef".to_string()));
        assert!(ok.validate().is_ok());

        let bad = PolicySetResult::default().with_continuation_token(Some("abc\u{0}".to_string()));
        assert!(bad.validate().is_err());

        assert!(PolicySetResult::default().validate().is_ok());
    }
}
