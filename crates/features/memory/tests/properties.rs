use composer_memory::{MemorySize, ValidationError, group_digits, strip_separators, validate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whole_gigabytes_in_range_are_accepted(gb in 4u64..=8_192) {
        let mb = gb * 1_024;
        let size = validate(&mb.to_string()).unwrap();
        prop_assert_eq!(size.megabytes(), mb);
        prop_assert_eq!(validate(&group_digits(&mb.to_string())), Ok(size));
    }

    #[test]
    fn below_minimum_is_min(mb in 0u64..4_096) {
        prop_assert_eq!(validate(&mb.to_string()), Err(ValidationError::Min));
    }

    #[test]
    fn above_maximum_is_max(mb in 8_388_609u64..) {
        prop_assert_eq!(validate(&mb.to_string()), Err(ValidationError::Max));
    }

    #[test]
    fn off_step_in_range_is_not_multiple(mb in 4_096u64..=8_388_608) {
        prop_assume!(mb % 1_024 != 0);
        prop_assert_eq!(validate(&mb.to_string()), Err(ValidationError::NotMultiple));
    }

    #[test]
    fn stray_characters_are_invalid(raw in "[0-9,]{0,6}[a-zA-Z .+_-][0-9a-z,]{0,4}") {
        prop_assert_eq!(validate(&raw), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn validation_is_deterministic(raw in "\\PC{0,12}") {
        prop_assert_eq!(validate(&raw), validate(&raw));
    }

    #[test]
    fn grouping_never_changes_the_verdict(raw in "[0-9]{1,9}") {
        let grouped = group_digits(&raw);
        prop_assert_eq!(strip_separators(&grouped), raw.clone());
        prop_assert_eq!(validate(&grouped), validate(&raw));
    }

    #[test]
    fn accepted_sizes_survive_serde(gb in 4u64..=8_192) {
        let size = MemorySize::try_from(gb * 1_024).unwrap();
        let json = serde_json::to_string(&size).unwrap();
        prop_assert_eq!(json.clone(), (gb * 1_024).to_string());
        prop_assert_eq!(serde_json::from_str::<MemorySize>(&json).unwrap(), size);
    }
}

#[test]
fn deserializing_rejects_invalid_sizes() {
    assert!(serde_json::from_str::<MemorySize>("4097").is_err());
    assert!(serde_json::from_str::<MemorySize>("1024").is_err());
}

#[test]
fn errors_serialize_as_kind_names() {
    assert_eq!(serde_json::to_string(&ValidationError::NotMultiple).unwrap(), "\"NOT_MULTIPLE\"");
}
