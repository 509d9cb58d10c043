use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_data_with_records, rv, setup_data_path, temp_out};

#[test]
fn view_renders_the_first_page_by_default() {
    let data = init_data_with_records("view_first_page");

    rv().args(["--data", &data, "view"])
        .assert()
        .success()
        .stdout(contains("Last Name"))
        .stdout(contains("Smith"))
        .stdout(contains("Brown"))
        .stdout(contains("Showing 1-4 of 9"))
        // page 2 rows are not on page 1
        .stdout(contains("Jones").not());
}

#[test]
fn view_renders_the_requested_page() {
    let data = init_data_with_records("view_second_page");

    rv().args(["--data", &data, "view", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("Jones"))
        .stdout(contains("Davis"))
        .stdout(contains("Showing 5-8 of 9"))
        .stdout(contains("Smith").not());
}

#[test]
fn out_of_range_pages_clamp_instead_of_failing() {
    let data = init_data_with_records("view_clamp_high");

    rv().args(["--data", &data, "view", "--page", "999"])
        .assert()
        .success()
        .stdout(contains("Martinez"))
        .stdout(contains("Showing 9-9 of 9"));

    rv().args(["--data", &data, "view", "--page", "-5"])
        .assert()
        .success()
        .stdout(contains("Smith"))
        .stdout(contains("Showing 1-4 of 9"));
}

#[test]
fn non_numeric_page_defaults_to_page_one() {
    let data = init_data_with_records("view_page_nan");

    rv().args(["--data", &data, "view", "--page", "first"])
        .assert()
        .success()
        .stdout(contains("Showing 1-4 of 9"));
}

#[test]
fn search_filters_across_fields_case_insensitively() {
    let data = init_data_with_records("view_search");

    // matches the Last Name field
    rv().args(["--data", &data, "view", "--search", "SMITH"])
        .assert()
        .success()
        .stdout(contains("Smith"))
        .stdout(contains("Showing 1-1 of 1"));

    // matches the Code field on several records
    rv().args(["--data", &data, "view", "--search", "lv"])
        .assert()
        .success()
        .stdout(contains("Showing 1-3 of 3"));
}

#[test]
fn zero_matches_and_missing_data_render_distinct_messages() {
    let data = init_data_with_records("view_no_match");

    rv().args(["--data", &data, "view", "--search", "zzzzz"])
        .assert()
        .success()
        .stdout(contains("No records match 'zzzzz'"))
        .stdout(contains("Showing 0-0 of 0"));

    let missing = setup_data_path("view_missing_data");
    rv().args(["--data", &missing, "view"])
        .assert()
        .success()
        .stdout(contains("No records loaded."))
        .stdout(contains("Showing 0-0 of 0"))
        .stderr(contains("not found"));
}

#[test]
fn malformed_data_degrades_to_the_empty_state() {
    let data = setup_data_path("view_malformed");
    fs::write(&data, "not json at all").expect("write");

    rv().args(["--data", &data, "view"])
        .assert()
        .success()
        .stdout(contains("No records loaded."))
        .stderr(contains("Invalid JSON"));
}

#[test]
fn custom_page_size_changes_the_slicing() {
    let data = init_data_with_records("view_page_size");

    rv().args(["--data", &data, "view", "--page-size", "3", "--page", "3"])
        .assert()
        .success()
        .stdout(contains("Showing 7-9 of 9"));
}

#[test]
fn view_writes_an_html_fragment() {
    let data = init_data_with_records("view_html");
    let out = temp_out("view_html", "html");

    rv().args(["--data", &data, "view", "--page", "2", "--html", &out])
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read html");
    assert!(html.contains("<table class='data-table'>"));
    assert!(html.contains("Jones"));
    assert!(html.contains("<a class='page active' href='?page=2'>2</a>"));
    assert!(html.contains("<a class='page-nav' href='?page=1'>&lt;</a>"));
    assert!(html.contains("<a class='page-nav' href='?page=3'>&gt;</a>"));
    assert!(html.contains("Showing 5-8 of 9"));
}

#[test]
fn init_in_test_mode_creates_the_data_file() {
    let data = setup_data_path("init_data");

    rv().args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&data).expect("read data file");
    assert_eq!(content.trim(), "[]");
}
