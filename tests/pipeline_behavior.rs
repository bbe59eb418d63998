//! End-to-end behavior of the load → normalize → aggregate pipeline over
//! on-disk CSV files.

use std::io::Write;

use vacstat_core::{Dataset, DatasetError, RateTable, StatsReport, YearStats};
use vacstat_tests::{csv_fixture, csv_fixture_with_header, rub_row, HEADER};

fn load(file: &tempfile::NamedTempFile) -> Dataset {
    Dataset::load_path(file.path(), &RateTable::default()).expect("dataset should load")
}

#[test]
fn when_rows_mix_currencies_yearly_stats_match_the_acceptance_example() {
    let file = csv_fixture(&[
        "Analyst,50000,70000,RUR,Moscow,2023-01-15T00:00+0300".to_owned(),
        "Analyst,1000,2000,USD,Moscow,2022-06-01T00:00+0300".to_owned(),
    ]);

    let dataset = load(&file);
    let stats = vacstat_core::yearly_stats(&dataset);

    assert_eq!(
        stats,
        vec![
            (
                "2023".to_owned(),
                YearStats {
                    average: 60000,
                    count: 1
                }
            ),
            (
                "2022".to_owned(),
                YearStats {
                    average: 90990, // floor(1500 * 60.66)
                    count: 1
                }
            ),
        ]
    );
}

#[test]
fn when_file_has_only_a_header_loading_fails_with_empty() {
    let file = csv_fixture(&[]);
    let err = Dataset::load_path(file.path(), &RateTable::default()).expect_err("must fail");
    assert!(matches!(err, DatasetError::Empty));
}

#[test]
fn when_a_row_has_an_empty_area_it_affects_no_aggregate() {
    let file = csv_fixture(&[
        rub_row("Analyst", 100, 100, "Moscow", 2022),
        "Analyst,50000,70000,RUR,,2022-01-15T00:00+0300".to_owned(),
    ]);

    let dataset = load(&file);
    assert_eq!(dataset.total(), 1);
    assert_eq!(dataset.skipped(), 1);

    let stats = vacstat_core::yearly_stats(&dataset);
    assert_eq!(stats[0].1.count, 1);
    assert_eq!(stats[0].1.average, 100);

    let breakdown = vacstat_core::city_breakdown(&dataset);
    assert_eq!(breakdown.shares.len(), 1);
    assert_eq!(breakdown.shares[0].city, "Moscow");
    assert_eq!(breakdown.shares[0].share, 1.0);
}

#[test]
fn when_the_header_carries_a_bom_the_first_column_is_still_recognized() {
    let file = csv_fixture_with_header(
        "\u{feff}name,salary_from,salary_to,salary_currency,area_name,published_at",
        &[rub_row("Analyst", 100, 100, "Moscow", 2022)],
    );

    let dataset = load(&file);
    assert_eq!(dataset.postings()[0].name, "Analyst");
}

#[test]
fn when_extra_columns_are_present_they_are_ignored() {
    let file = csv_fixture_with_header(
        "employer,name,salary_from,salary_to,salary_currency,area_name,published_at,premium",
        &["Acme,Analyst,100,100,RUR,Moscow,2022-01-15T00:00+0300,yes".to_owned()],
    );

    let dataset = load(&file);
    assert_eq!(dataset.total(), 1);
    assert_eq!(dataset.postings()[0].name, "Analyst");
    assert_eq!(dataset.postings()[0].area, "Moscow");
}

#[test]
fn when_currency_is_unknown_the_row_is_skipped_and_counted() {
    let file = csv_fixture(&[
        rub_row("Analyst", 100, 100, "Moscow", 2022),
        "Analyst,100,100,MDL,Moscow,2022-01-15T00:00+0300".to_owned(),
    ]);

    let dataset = load(&file);
    assert_eq!(dataset.total(), 1);
    assert_eq!(dataset.skipped(), 1);
    assert_eq!(dataset.unknown_currency(), 1);
}

#[test]
fn when_markup_wraps_the_title_the_filter_sees_clean_text() {
    let file = csv_fixture(&[
        "<strong>Senior   Analyst</strong>,100,100,RUR,Moscow,2022-01-15T00:00+0300".to_owned(),
        rub_row("Driver", 200, 200, "Moscow", 2022),
    ]);

    let dataset = load(&file);
    let stats = vacstat_core::yearly_stats_where(&dataset, |p| p.title_contains("Senior Analyst"));
    assert_eq!(stats[0].1.count, 1);
    assert_eq!(stats[0].1.average, 100);
}

#[test]
fn report_serializes_the_collaborator_contract() {
    let file = csv_fixture(&[
        rub_row("Analyst", 100, 100, "Moscow", 2022),
        rub_row("Driver", 200, 200, "Kazan", 2023),
    ]);

    let dataset = load(&file);
    let report = StatsReport::build(&dataset, "Analyst");
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["total"], 2);
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["years"][0]["year"], "2022");
    assert_eq!(json["years"][0]["all"], serde_json::json!({"average": 100, "count": 1}));
    assert_eq!(
        json["years"][1]["filtered"],
        serde_json::json!({"average": 0, "count": 0})
    );
    assert_eq!(json["city_shares"][0]["share"], 0.5);
    assert_eq!(json["city_averages"].as_array().map(Vec::len), Some(2));
}

#[test]
fn malformed_middle_rows_do_not_derail_later_rows() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{HEADER}").expect("write header");
    writeln!(file, "Analyst,100,100,RUR,Moscow,2022-01-15T00:00+0300").expect("write row");
    writeln!(file, "Broken,abc,100,RUR,Moscow,2022-01-15T00:00+0300").expect("write row");
    writeln!(file, "Broken,100,100,RUR,Moscow,yesterday").expect("write row");
    writeln!(file, "Analyst,300,300,RUR,Moscow,2023-01-15T00:00+0300").expect("write row");
    file.flush().expect("flush temp csv");

    let dataset = load(&file);
    assert_eq!(dataset.total(), 2);
    assert_eq!(dataset.skipped(), 2);

    let years: Vec<String> = vacstat_core::yearly_stats(&dataset)
        .into_iter()
        .map(|(y, _)| y)
        .collect();
    assert_eq!(years, ["2022", "2023"]);
}
