//! Authorization decision for calls an account is about to execute.
//!
//! The policy has two inputs: the account's answer to "is this caller an
//! owner?" and the account's whitelist. Both are read through traits so the
//! decision can be exercised without a runtime.

use crate::types::{Decision, OwnerQueryError};

pub(crate) const LOG_TARGET: &str = "pallet-whitelist-hook";

/// Read-only owner query answered by the account the hook is attached to.
pub trait AccountOwnership<AccountId> {
    /// Whether `who` is an owner of `account`.
    fn is_owner(account: &AccountId, who: &AccountId) -> Result<bool, OwnerQueryError>;
}

/// Read-only view of the per-account whitelist.
pub trait WhitelistStore<AccountId> {
    fn is_whitelisted(account: &AccountId, target: &AccountId) -> bool;
}

/// Entry point an account's execution engine calls before performing a call.
pub trait CallGate<AccountId> {
    fn gate(
        account: &AccountId,
        caller: &AccountId,
        target: &AccountId,
        payload: &[u8],
    ) -> Decision;
}

/// Decide whether `caller` may route a call to `target` through `account`.
///
/// Owners are allowed unconditionally. Anyone else is allowed only when the
/// target is on the account's whitelist. A failed owner query denies.
pub fn evaluate<AccountId, O, W>(
    account: &AccountId,
    caller: &AccountId,
    target: &AccountId,
    payload: &[u8],
) -> Decision
where
    AccountId: core::fmt::Debug,
    O: AccountOwnership<AccountId>,
    W: WhitelistStore<AccountId>,
{
    match O::is_owner(account, caller) {
        Ok(true) => {
            log::debug!(
                target: LOG_TARGET,
                "allow {caller:?} -> {target:?} on {account:?}: caller is owner ({} byte payload)",
                payload.len()
            );
            return Decision::Allow;
        }
        Ok(false) => {}
        Err(err) => {
            log::warn!(
                target: LOG_TARGET,
                "deny {caller:?} -> {target:?} on {account:?}: owner query failed with {err:?}"
            );
            return Decision::Deny;
        }
    }

    if W::is_whitelisted(account, target) {
        log::debug!(
            target: LOG_TARGET,
            "allow {caller:?} -> {target:?} on {account:?}: whitelisted"
        );
        Decision::Allow
    } else {
        log::debug!(
            target: LOG_TARGET,
            "deny {caller:?} -> {target:?} on {account:?}: not whitelisted"
        );
        Decision::Deny
    }
}
