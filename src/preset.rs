use clap::ValueEnum;
use serde::Serialize;

use crate::pattern::SpanEnd;

/// Rule helper that rejects builds without a matching provisioning profile
pub const PROVISIONING_PROFILE_VALIDATOR: &str = "_validate_provisioning_profile";

const KWARGS_STUB: &str = "def _validate_provisioning_profile(**kwargs):
    # Provisioning profile validation disabled
    return

";

const POSITIONAL_STUB: &str =
    "def _validate_provisioning_profile(platform_prerequisites, provisioning_profile, rule_descriptor):
    # Provisioning profile validation disabled
    return

";

/// Built-in rewrites for the provisioning profile validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `**kwargs` stub; only rewrites when another definition follows
    #[default]
    ValidateProvisioningProfile,
    /// Stub with the validator's positional parameters; also rewrites a
    /// validator that is the last definition in the file
    ValidateProvisioningProfileTail,
}

impl Preset {
    /// Function the preset rewrites
    pub fn target(&self) -> &'static str {
        PROVISIONING_PROFILE_VALIDATOR
    }

    /// Definition that replaces the target
    pub fn replacement(&self) -> &'static str {
        match self {
            Preset::ValidateProvisioningProfile => KWARGS_STUB,
            Preset::ValidateProvisioningProfileTail => POSITIONAL_STUB,
        }
    }

    pub fn span_end(&self) -> SpanEnd {
        match self {
            Preset::ValidateProvisioningProfile => SpanEnd::NextDefinition,
            Preset::ValidateProvisioningProfileTail => SpanEnd::NextDefinitionOrEof,
        }
    }
}
