//! Value types shared by the pallet and the policy.

use frame_support::pallet_prelude::*;
use sp_std::prelude::*;

/// Display name reported by every deployment of the hook.
pub const HOOK_NAME: &[u8] = b"Whitelist Hook";

/// Semantic version of the hook's behavior.
pub const HOOK_VERSION: &[u8] = b"1.0.0";

/// The hook only classifies calls, it never needs root access to the account.
pub const REQUIRES_ROOT_ACCESS: bool = false;

pub type MaxNameLen = ConstU32<64>;
pub type MaxVersionLen = ConstU32<16>;
pub type MaxUrlLen = ConstU32<256>;

/// Outcome of gating a call on behalf of an account.
#[derive(Encode, Decode, TypeInfo, MaxEncodedLen, Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Why the account could not answer an owner query.
///
/// The gate turns any of these into [`Decision::Deny`]; the mutation entry
/// point turns them into `Error::Unauthorized`.
#[derive(Encode, Decode, TypeInfo, Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum OwnerQueryError {
    /// The account does not exist or does not expose an owner set.
    Unreachable,
    /// The account answered with something that is not a boolean.
    MalformedResponse,
}

/// Descriptive metadata read by the protocol manager and UIs.
#[derive(Encode, Decode, TypeInfo, MaxEncodedLen, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct PolicyMetadata {
    pub name: BoundedVec<u8, MaxNameLen>,
    pub version: BoundedVec<u8, MaxVersionLen>,
    pub requires_root_access: bool,
    pub icon_url: BoundedVec<u8, MaxUrlLen>,
    pub app_url: BoundedVec<u8, MaxUrlLen>,
}

impl PolicyMetadata {
    /// Metadata with the built-in name, version and root flag and the given URLs.
    pub fn with_urls(
        icon_url: BoundedVec<u8, MaxUrlLen>,
        app_url: BoundedVec<u8, MaxUrlLen>,
    ) -> Self {
        Self {
            name: BoundedVec::truncate_from(HOOK_NAME.to_vec()),
            version: BoundedVec::truncate_from(HOOK_VERSION.to_vec()),
            requires_root_access: REQUIRES_ROOT_ACCESS,
            icon_url,
            app_url,
        }
    }
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self::with_urls(BoundedVec::new(), BoundedVec::new())
    }
}
