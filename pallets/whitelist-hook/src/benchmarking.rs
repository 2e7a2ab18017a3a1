//! Benchmarking setup for pallet-whitelist-hook

use super::*;

#[allow(unused)]
use crate::Pallet as WhitelistHook;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    /// Worst case: every target is new, so each one costs a read, a write and an event.
    #[benchmark]
    fn add_to_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let smart_account: T::AccountId = whitelisted_caller();
        let targets: Vec<T::AccountId> = (0..n).map(|i| account("target", i, 0)).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(smart_account.clone()), smart_account.clone(), targets.clone());

        for target in &targets {
            assert!(Whitelist::<T>::get(&smart_account, target));
        }
    }

    impl_benchmark_test_suite!(WhitelistHook, crate::mock::new_test_ext(), crate::mock::Test);
}
