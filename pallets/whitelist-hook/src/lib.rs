#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is deprecated upstream; kept until the runtime moves to the new bound
#![allow(deprecated)]

//! # Whitelist Hook
//!
//! A hook installed on programmable accounts that decides whether a call the
//! account is about to execute may go ahead.
//!
//! - Owners of the account may call anything, including plain transfers
//!   with an empty payload.
//! - Everyone else may only reach targets on the account's whitelist.
//!
//! The account's execution engine asks through [`CallGate::gate`] and reverts
//! on [`Decision::Deny`]. Owner checks are delegated back to the account
//! through [`Config::Ownership`].

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::SaturatedConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use policy::{evaluate, AccountOwnership, CallGate, WhitelistStore};
pub use types::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod policy;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use policy::LOG_TARGET;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Answers "is this caller an owner of the account?" on behalf of the account.
        type Ownership: AccountOwnership<Self::AccountId>;

        /// Maximum number of targets accepted by a single `add_to_whitelist` call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Icon shown by the protocol manager, written once at genesis
    #[pallet::storage]
    pub type IconUrl<T> = StorageValue<_, BoundedVec<u8, MaxUrlLen>, ValueQuery>;

    /// Companion app URL, written once at genesis
    #[pallet::storage]
    pub type AppUrl<T> = StorageValue<_, BoundedVec<u8, MaxUrlLen>, ValueQuery>;

    /// Targets each account allows non-owner callers to reach
    #[pallet::storage]
    pub type Whitelist<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Target added to an account's whitelist
        AddressWhitelisted { account: T::AccountId, target: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Signer is neither the account nor one of its owners.
        Unauthorized,
        /// More targets than `MaxBatchSize`.
        BatchTooLarge,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Add `targets` to the whitelist of `account`.
        ///
        /// Must be signed by the account itself or by one of its owners.
        /// Targets already on the whitelist, or repeated within `targets`,
        /// are skipped without an event. An empty `targets` is a no-op.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist(targets.len().saturated_into()))]
        pub fn add_to_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            targets: Vec<T::AccountId>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_can_manage(&account, &who)?;
            ensure!(
                targets.len() <= T::MaxBatchSize::get() as usize,
                Error::<T>::BatchTooLarge
            );

            for target in Self::insert_targets(&account, &targets) {
                Self::deposit_event(Event::AddressWhitelisted { account: account.clone(), target });
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Icon shown by the protocol manager (empty for none)
        pub icon_url: Vec<u8>,
        /// Companion app URL (empty for none)
        pub app_url: Vec<u8>,
        /// Whitelists to seed, per account
        pub whitelisted: Vec<(T::AccountId, Vec<T::AccountId>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let icon_url: BoundedVec<u8, MaxUrlLen> =
                self.icon_url.clone().try_into().expect("Icon URL too long (max 256 bytes)");
            IconUrl::<T>::put(icon_url);

            let app_url: BoundedVec<u8, MaxUrlLen> =
                self.app_url.clone().try_into().expect("App URL too long (max 256 bytes)");
            AppUrl::<T>::put(app_url);

            for (account, targets) in &self.whitelisted {
                let _ = Pallet::<T>::insert_targets(account, targets);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Metadata as reported to the protocol manager.
    ///
    /// Name, version and the root flag come from the running code; only the
    /// URLs are read from storage.
    pub fn metadata() -> PolicyMetadata {
        PolicyMetadata::with_urls(IconUrl::<T>::get(), AppUrl::<T>::get())
    }

    pub fn hook_name() -> Vec<u8> {
        HOOK_NAME.to_vec()
    }

    pub fn hook_version() -> Vec<u8> {
        HOOK_VERSION.to_vec()
    }

    pub fn requires_root_access() -> bool {
        REQUIRES_ROOT_ACCESS
    }

    pub fn is_whitelisted(account: &T::AccountId, target: &T::AccountId) -> bool {
        Whitelist::<T>::get(account, target)
    }

    /// Decide whether `caller` may route `payload` to `target` through `account`.
    pub fn gate(
        account: &T::AccountId,
        caller: &T::AccountId,
        target: &T::AccountId,
        payload: &[u8],
    ) -> Decision {
        evaluate::<T::AccountId, T::Ownership, Self>(account, caller, target, payload)
    }

    /// Insert every target not yet present, returning the ones that were new
    /// in input order.
    pub(crate) fn insert_targets(
        account: &T::AccountId,
        targets: &[T::AccountId],
    ) -> Vec<T::AccountId> {
        let mut added = Vec::new();
        for target in targets {
            if !Whitelist::<T>::get(account, target) {
                Whitelist::<T>::insert(account, target, true);
                added.push(target.clone());
            }
        }
        added
    }

    fn ensure_can_manage(account: &T::AccountId, who: &T::AccountId) -> DispatchResult {
        if account == who {
            return Ok(());
        }
        match T::Ownership::is_owner(account, who) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::<T>::Unauthorized.into()),
            Err(err) => {
                log::warn!(
                    target: LOG_TARGET,
                    "rejecting whitelist update by {who:?} on {account:?}: \
                     owner query failed with {err:?}"
                );
                Err(Error::<T>::Unauthorized.into())
            }
        }
    }
}

impl<T: Config> WhitelistStore<T::AccountId> for Pallet<T> {
    fn is_whitelisted(account: &T::AccountId, target: &T::AccountId) -> bool {
        Whitelist::<T>::get(account, target)
    }
}

impl<T: Config> CallGate<T::AccountId> for Pallet<T> {
    fn gate(
        account: &T::AccountId,
        caller: &T::AccountId,
        target: &T::AccountId,
        payload: &[u8],
    ) -> Decision {
        evaluate::<T::AccountId, T::Ownership, Self>(account, caller, target, payload)
    }
}
