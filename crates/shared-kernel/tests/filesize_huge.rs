use dirscout_shared_kernel::FileSize;
use proptest::prelude::*;

#[test]
fn max_u64_lands_in_exabytes() {
    assert_eq!(FileSize::from(u64::MAX).to_human(), "16.0 EB");
}

proptest! {
    #[test]
    fn non_zero_always_has_unit_and_fraction(bytes in 1u64..) {
        let text = FileSize::from(bytes).to_human();
        let (value, unit) = text.split_once(' ').expect("value and unit");
        prop_assert!(["B", "KB", "MB", "GB", "TB", "PB", "EB"].contains(&unit));
        prop_assert!(value.contains('.'));
        let parsed: f64 = value.parse().expect("numeric value");
        prop_assert!(parsed >= 1.0 && parsed <= 1024.0);
    }
}
