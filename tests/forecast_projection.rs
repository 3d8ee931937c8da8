use chrono::NaiveDate;
use gridbook::error::GridbookError;
use gridbook::forecast::{self, ForecastPoint};
use gridbook::record::Ledger;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn zero_horizon_is_empty() {
    let ledger = Ledger::new();
    ledger.insert(date(2024, 1, 1), 1000.0).unwrap();
    let points = forecast::project(&ledger.all().unwrap(), 0, 2025).unwrap();
    assert!(points.is_empty());
}

#[test]
fn horizon_outside_range_is_rejected() {
    let records = Vec::new();
    for years in [-1, 6, 100] {
        let err = forecast::project(&records, years, 2025).unwrap_err();
        assert!(matches!(err, GridbookError::InvalidHorizon { .. }));
        assert_eq!(format!("{err}"), "Years must be between 0 and 5");
    }
}

#[test]
fn empty_ledger_projects_from_the_default_base() {
    let points = forecast::project(&[], 1, 2025).unwrap();
    assert_eq!(
        points,
        vec![ForecastPoint {
            year: 2026,
            forecast_gwh: 525.0
        }]
    );
}

#[test]
fn latest_date_supplies_the_base() {
    let ledger = Ledger::new();
    ledger.insert(date(2024, 1, 1), 1000.0).unwrap();
    ledger.insert(date(2024, 6, 1), 1200.0).unwrap();
    let points = forecast::project(&ledger.all().unwrap(), 2, 2025).unwrap();
    assert_eq!(
        points,
        vec![
            ForecastPoint {
                year: 2026,
                forecast_gwh: 1260.0
            },
            ForecastPoint {
                year: 2027,
                forecast_gwh: 1323.0
            },
        ]
    );
}

#[test]
fn max_date_tie_goes_to_the_highest_id() {
    let ledger = Ledger::new();
    ledger.insert(date(2024, 6, 1), 1000.0).unwrap();
    ledger.insert(date(2024, 6, 1), 2000.0).unwrap();
    ledger.insert(date(2024, 1, 1), 9999.0).unwrap();
    assert_eq!(forecast::base_value(&ledger.all().unwrap()), 2000.0);
}

#[test]
fn projection_rounds_to_one_decimal() {
    let ledger = Ledger::new();
    ledger.insert(date(2024, 1, 1), 101.0).unwrap();
    let points = forecast::project(&ledger.all().unwrap(), 1, 2025).unwrap();
    // 101 * 1.05 = 106.05, carried to one decimal place
    assert_eq!(points[0].forecast_gwh, 106.1);
}

#[test]
fn projection_leaves_the_ledger_untouched() {
    let ledger = Ledger::new();
    ledger.insert(date(2024, 1, 1), 1000.0).unwrap();
    let before = ledger.all().unwrap();
    forecast::project(&before, 5, 2025).unwrap();
    assert_eq!(ledger.all().unwrap(), before);
}
