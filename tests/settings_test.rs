use order_domain::settings::Settings;

/// The shared accessor returns the same instance every time, with default flags.
#[test]
fn shared_settings_is_a_single_instance_with_default_flags() {
    let first = Settings::shared();
    let second = Settings::shared();

    assert!(std::ptr::eq(first, second));
    assert!(!first.user_auto_setting);
    assert!(!first.user_abs);
}

/// Explicitly constructed settings are independent of the shared instance.
#[test]
fn constructed_settings_are_independent_of_shared() {
    let settings = Settings::new(true, false);

    assert!(settings.user_auto_setting);
    assert!(!settings.user_abs);

    let shared = Settings::shared();
    assert!(!std::ptr::eq(&settings, shared));
    // The shared instance is unaffected
    assert!(!shared.user_auto_setting);
}

#[test]
fn default_settings_have_all_flags_off() {
    let settings = Settings::default();

    assert!(!settings.user_auto_setting);
    assert!(!settings.user_abs);
}

/// Environment-derived settings honor set, garbage, and unset values without
/// failing. Kept as a single test because the process environment is shared
/// across test threads.
#[test]
fn from_env_reads_flags_leniently() {
    std::env::remove_var("ORDER_AUTO_SETTING");
    std::env::remove_var("ORDER_ABS");
    let unset = Settings::from_env();
    assert!(!unset.user_auto_setting);
    assert!(!unset.user_abs);

    std::env::set_var("ORDER_AUTO_SETTING", "true");
    std::env::set_var("ORDER_ABS", "1");
    let enabled = Settings::from_env();
    assert!(enabled.user_auto_setting);
    assert!(enabled.user_abs);

    std::env::set_var("ORDER_AUTO_SETTING", "yes please");
    std::env::set_var("ORDER_ABS", "0");
    let garbage = Settings::from_env();
    assert!(!garbage.user_auto_setting);
    assert!(!garbage.user_abs);

    std::env::remove_var("ORDER_AUTO_SETTING");
    std::env::remove_var("ORDER_ABS");
}
