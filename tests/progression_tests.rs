//! Progression tests - banking, level thresholds, persisted form

use tui_2060::core::Progression;
use tui_2060::types::LEVEL_THRESHOLDS;

#[test]
fn test_bank_below_threshold_keeps_level() {
    let mut p = Progression::default();
    assert_eq!(p.bank(120, &LEVEL_THRESHOLDS), 0);
    assert_eq!(p, Progression::new(0, 120));
}

#[test]
fn test_bank_pays_threshold_on_level_up() {
    let mut p = Progression::new(0, 8);
    assert_eq!(p.bank(25, &[10, 20]), 2);
    assert_eq!(p, Progression::new(2, 3));
}

#[test]
fn test_exact_threshold_levels_up_with_zero_left() {
    let mut p = Progression::new(1, 400);
    assert_eq!(p.bank(600, &LEVEL_THRESHOLDS), 1);
    assert_eq!(p, Progression::new(2, 0));
}

#[test]
fn test_last_level_never_advances() {
    let mut p = Progression::new(2, 0);
    assert_eq!(p.bank(1_000_000, &[10, 20]), 0);
    assert_eq!(p.level, 2);
    assert_eq!(p.xp, 1_000_000);
    assert_eq!(p.threshold(&[10, 20]), None);
    assert_eq!(p.fraction(&[10, 20]), 0.0);
}

#[test]
fn test_zero_score_banks_nothing() {
    let mut p = Progression::new(3, 7);
    assert_eq!(p.bank(0, &LEVEL_THRESHOLDS), 0);
    assert_eq!(p, Progression::new(3, 7));
}

#[test]
fn test_fraction_of_threshold() {
    let p = Progression::new(0, 250);
    assert_eq!(p.fraction(&LEVEL_THRESHOLDS), 0.5);
}

#[test]
fn test_encode_decode() {
    let p = Progression::new(4, 17);
    assert_eq!(p.encode(), "4:17");
    assert_eq!(Progression::decode("4:17"), p);
}

#[test]
fn test_decode_is_best_effort() {
    assert_eq!(Progression::decode(""), Progression::default());
    assert_eq!(Progression::decode("abc:7"), Progression::new(0, 7));
    assert_eq!(Progression::decode("3:x"), Progression::new(3, 0));
    assert_eq!(Progression::decode("5"), Progression::new(5, 0));
    assert_eq!(Progression::decode(" 2 : 9 "), Progression::new(2, 9));
}
