use crate as pallet_whitelist_hook;
use crate::{AccountOwnership, OwnerQueryError};
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};
use std::{cell::RefCell, collections::BTreeSet};

type Block = frame_system::mocking::MockBlock<Test>;

/// Programmable account the hook is installed on.
pub const ACCOUNT: u64 = 10;
/// Second account with its own, independent whitelist.
pub const OTHER_ACCOUNT: u64 = 11;
/// Owner of `ACCOUNT`.
pub const OWNER: u64 = 1;
/// Neither the account nor an owner.
pub const STRANGER: u64 = 2;
/// Target seeded on `ACCOUNT`'s whitelist at genesis.
pub const GENESIS_TARGET: u64 = 20;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        WhitelistHook: pallet_whitelist_hook,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

thread_local! {
    static OWNERS: RefCell<BTreeSet<(u64, u64)>> = RefCell::new(BTreeSet::new());
    static UNREACHABLE: RefCell<BTreeSet<u64>> = RefCell::new(BTreeSet::new());
}

/// Stands in for the account's `isOwner` query.
pub struct MockOwnership;
impl AccountOwnership<u64> for MockOwnership {
    fn is_owner(account: &u64, who: &u64) -> Result<bool, OwnerQueryError> {
        if UNREACHABLE.with(|u| u.borrow().contains(account)) {
            return Err(OwnerQueryError::Unreachable);
        }
        Ok(OWNERS.with(|o| o.borrow().contains(&(*account, *who))))
    }
}

pub fn set_owner(account: u64, who: u64) {
    OWNERS.with(|o| o.borrow_mut().insert((account, who)));
}

/// Make every owner query against `account` fail.
pub fn set_unreachable(account: u64) {
    UNREACHABLE.with(|u| u.borrow_mut().insert(account));
}

impl pallet_whitelist_hook::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ownership = MockOwnership;
    type MaxBatchSize = ConstU32<16>;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    OWNERS.with(|o| o.borrow_mut().clear());
    UNREACHABLE.with(|u| u.borrow_mut().clear());
    set_owner(ACCOUNT, OWNER);

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_whitelist_hook::GenesisConfig::<Test> {
        icon_url: vec![],
        app_url: vec![],
        whitelisted: vec![(ACCOUNT, vec![GENESIS_TARGET])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
