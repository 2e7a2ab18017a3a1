//! Weights for pallet-whitelist-hook.
//!
//! Hand-calibrated until the `runtime-benchmarks` output replaces them.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn add_to_whitelist(n: u32) -> Weight;
}

/// Weights measured against the runtime's database weight.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `WhitelistHook::Whitelist` (r:n w:n)
    fn add_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(2_500_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(n.into()))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
}

impl WeightInfo for () {
    fn add_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(2_500_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(n.into()))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
}
