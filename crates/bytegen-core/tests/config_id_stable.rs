use bytegen_core::config::defaults::default_config;
use bytegen_core::config::format;
use bytegen_core::config::options::{CsvOptions, NeutralizeStrategy, PresetMode};

#[test]
fn config_id_is_stable_for_same_config() {
    let a = format::config_id_16(&default_config());
    let b = format::config_id_16(&default_config());
    assert_eq!(a, b);
    assert_eq!(format::config_id_hex(&default_config()).len(), 32);
}

#[test]
fn config_id_changes_when_strategy_changes() {
    let mut a = default_config();
    a.preset = PresetMode::Csv(CsvOptions::default());

    let mut b = a;
    b.preset = PresetMode::Csv(CsvOptions {
        strategy: NeutralizeStrategy::Space,
        ..CsvOptions::default()
    });

    assert_ne!(
        format::config_id_16(&a),
        format::config_id_16(&b),
        "config_id must change when the neutralize strategy changes"
    );
}

#[test]
fn config_id_changes_with_bold_digits_and_charset() {
    let base = default_config();

    let mut digits = base;
    digits.bold = Some(bytegen_core::config::options::BoldOptions {
        include_digits: true,
    });

    let mut latin = base;
    latin.finalize.charset = "windows-1252".parse().unwrap();

    let ids = [
        format::config_id_16(&base),
        format::config_id_16(&digits),
        format::config_id_16(&latin),
    ];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[0], ids[2]);
    assert_ne!(ids[1], ids[2]);
}

#[test]
fn canonical_bytes_start_with_magic() {
    let b = format::encode(&default_config());
    assert_eq!(&b[0..4], b"BGC1");
}
