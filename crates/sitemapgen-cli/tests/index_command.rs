#![allow(missing_docs)]

mod common;

use std::fs;

use anyhow::Result;
use common::{INDEX_START, sitemapgen_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn index_from_stdin() {
    let expected = format!(
        "{INDEX_START}\
         <sitemap>\n\t<loc>http://www.example.com/sitemap-1.xml</loc>\n</sitemap>\n\
         <sitemap>\n\t<loc>http://www.example.com/sitemap-2.xml</loc>\n\t<lastmod>2016-02-28T23:42:00+01:00</lastmod>\n</sitemap>\n\
         </sitemapindex>"
    );

    sitemapgen_cmd()
        .arg("index")
        .write_stdin(
            "http://www.example.com/sitemap-1.xml\n\
             {\"loc\": \"http://www.example.com/sitemap-2.xml\", \"lastmod\": \"2016-02-28T23:42:00+01:00\"}\n",
        )
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn index_empty_input_is_framed() {
    sitemapgen_cmd()
        .arg("index")
        .write_stdin("# nothing yet\n")
        .assert()
        .success()
        .stdout(format!("{INDEX_START}</sitemapindex>"));
}

#[test]
fn index_text_to_file() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("index.txt");

    sitemapgen_cmd()
        .args(["index", "--format", "text", "-o"])
        .arg(&output)
        .write_stdin("/s1.xml\n/s2.xml\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output)?, "/s1.xml\n/s2.xml\n");
    Ok(())
}

#[test]
fn index_output_from_environment() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("index.xml");

    sitemapgen_cmd()
        .arg("index")
        .env("SITEMAPGEN_OUTPUT", &output)
        .write_stdin("/s1.xml\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fs::read_to_string(&output)?.ends_with("</sitemap>\n</sitemapindex>"));
    Ok(())
}

#[test]
fn index_output_into_missing_directory_fails() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("missing").join("index.xml");

    sitemapgen_cmd()
        .args(["index", "-o"])
        .arg(&output)
        .write_stdin("/s1.xml\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output"));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn index_invalid_lastmod_reports_line_number() {
    sitemapgen_cmd()
        .arg("index")
        .write_stdin("/s1.xml\n{\"loc\": \"/s2.xml\", \"lastmod\": \"soon\"}\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid entry on line 2"));
}

#[test]
fn index_rejects_unknown_format() {
    sitemapgen_cmd()
        .args(["index", "--format", "html"])
        .write_stdin("/s1.xml\n")
        .assert()
        .failure();
}
