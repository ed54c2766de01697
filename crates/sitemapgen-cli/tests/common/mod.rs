#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_home() -> &'static Path {
    static CONFIG_HOME: OnceLock<TempDir> = OnceLock::new();
    CONFIG_HOME
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a `sitemapgen` command isolated from the user's configuration and
/// `SITEMAPGEN_*` environment.
#[allow(dead_code)]
pub fn sitemapgen_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitemapgen"));
    cmd.timeout(CMD_TIMEOUT);
    let home = config_home();
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home);
    for key in [
        "SITEMAPGEN_PRIORITY",
        "SITEMAPGEN_CHANGEFREQ",
        "SITEMAPGEN_FORMAT",
        "SITEMAPGEN_OUTPUT",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[allow(dead_code)]
pub const URLSET_START: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:video=\"http://www.google.com/schemas/sitemap-video/1.1\" xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\n";

#[allow(dead_code)]
pub const INDEX_START: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";
