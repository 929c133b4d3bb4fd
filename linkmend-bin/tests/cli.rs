#[cfg(test)]
mod cli {
    use predicates::{
        prelude::PredicateBooleanExt,
        str::{contains, is_empty},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::{error::Error, fs};
    use tempfile::tempdir;
    use test_utils::{DirBuilder, main_command};

    type Result<T> = std::result::Result<T, Box<dyn Error>>;

    /// A small site with one page of every link flavour:
    /// `/about` and `/blog/` resolve, `/gone` does not
    fn site(dir: &std::path::Path) -> Result<()> {
        let builder = DirBuilder::new(dir);
        builder.str("about.html", "<h1>About</h1>")?;
        builder.html("blog/index.html", &["/about", "../index.html"])?;
        builder.html(
            "index.html",
            &[
                "/about",
                "/blog/",
                "/gone#top",
                "https://example.com",
                "//cdn.example.com/app.js",
                "mailto:me@example.com",
                "#main",
            ],
        )?;
        Ok(())
    }

    #[test]
    fn test_check_reports_every_internal_link() -> Result<()> {
        let dir = tempdir()?;
        site(dir.path())?;

        main_command!()
            .arg("check")
            .arg(dir.path())
            .assert()
            .code(2)
            .stdout(contains("\u{2713} /about"))
            .stdout(contains("\u{2713} /blog/"))
            .stdout(contains("\u{2717} /gone#top (line 3)"))
            .stdout(contains("-> Target file not found:"))
            .stdout(contains("example.com").not());

        Ok(())
    }

    #[test]
    fn test_check_success() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.str("about.html", "")?;
        builder.html("index.html", &["/", "/about", "about.html#team", "?page=2"])?;

        main_command!()
            .arg("check")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(contains("Successful.......4"))
            .stdout(contains("Broken...........0"));

        Ok(())
    }

    #[test]
    fn test_check_is_not_recursive_by_default() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.html("index.html", &[])?;
        builder.html("nested/page.html", &["/missing"])?;

        main_command!()
            .arg("check")
            .arg(dir.path())
            .assert()
            .success();

        main_command!()
            .args(["check", "--recursive"])
            .arg(dir.path())
            .assert()
            .code(2)
            .stdout(contains("/missing"));

        Ok(())
    }

    #[test]
    fn test_check_single_file_uses_parent_as_base() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.str("docs/other.html", "")?;
        let page = builder.html("docs/page.html", &["/other", "other.html"])?;

        main_command!()
            .arg("check")
            .arg(&page)
            .assert()
            .success()
            .stdout(contains("\u{2713} /other"));

        Ok(())
    }

    #[test]
    fn test_check_with_base() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.html("pages/index.html", &["/assets/logo.png"])?;
        builder.str("public/assets/logo.png", "")?;

        main_command!()
            .arg("check")
            .arg(dir.path().join("pages"))
            .assert()
            .code(2);

        main_command!()
            .arg("check")
            .arg(dir.path().join("pages"))
            .arg("--base")
            .arg(dir.path().join("public"))
            .assert()
            .success();

        Ok(())
    }

    #[test]
    fn test_check_with_base_moves_relative_links() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.html("pages/index.html", &["about.html"])?;
        builder.str("public/about.html", "")?;

        main_command!()
            .arg("check")
            .arg(dir.path().join("pages"))
            .assert()
            .code(2)
            .stdout(contains("\u{2717} about.html"));

        main_command!()
            .arg("check")
            .arg(dir.path().join("pages"))
            .arg("--base")
            .arg(dir.path().join("public"))
            .assert()
            .success()
            .stdout(contains("\u{2713} about.html"));

        Ok(())
    }

    #[test]
    fn test_check_compact_only_lists_broken_links() -> Result<()> {
        let dir = tempdir()?;
        site(dir.path())?;

        main_command!()
            .args(["check", "--format", "compact"])
            .arg(dir.path())
            .assert()
            .code(2)
            .stdout(contains("/gone#top"))
            .stdout(contains("/blog/").not())
            .stdout(contains("1 Broken"));

        Ok(())
    }

    #[test]
    fn test_check_json() -> Result<()> {
        let dir = tempdir()?;
        site(dir.path())?;

        let output = main_command!()
            .args(["check", "--format", "json"])
            .arg(dir.path())
            .output()?;
        assert_eq!(output.status.code(), Some(2));

        let json: Value = serde_json::from_slice(&output.stdout)?;
        // `about.html` and `index.html`; `blog/` is not walked
        assert_eq!(json["files"], 2);
        assert_eq!(json["broken"], 1);
        assert_eq!(json["successful"], 2);

        Ok(())
    }

    #[test]
    fn test_check_missing_directory() -> Result<()> {
        let dir = tempdir()?;

        main_command!()
            .arg("check")
            .arg(dir.path().join("nope"))
            .assert()
            .code(1)
            .stderr(contains("Cannot collect files from"));

        Ok(())
    }

    #[test]
    fn test_exclude_path() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.html("index.html", &[])?;
        builder.html("draft.html", &["/missing"])?;

        main_command!()
            .args(["check", "--exclude-path", "draft"])
            .arg(dir.path())
            .assert()
            .success();

        main_command!()
            .args(["check", "--exclude-path", "["])
            .arg(dir.path())
            .assert()
            .code(3);

        Ok(())
    }

    #[test]
    fn test_config_file_is_merged() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        builder.str("site/home.html", "")?;
        builder.html("site/index.html", &["/"])?;
        builder.str("linkmend.toml", "root_index = \"missing.html\"")?;

        // Picked up from the working directory
        main_command!()
            .current_dir(dir.path())
            .args(["check", "site"])
            .assert()
            .code(2);

        let config = builder.str("custom.toml", "root_index = \"home.html\"")?;
        main_command!()
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(dir.path().join("site"))
            .assert()
            .success();

        Ok(())
    }

    #[test]
    fn test_invalid_config_file() -> Result<()> {
        let dir = tempdir()?;
        let config = DirBuilder::new(dir.path()).str("bad.toml", "no_such_key = 1")?;

        main_command!()
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(dir.path())
            .assert()
            .code(3)
            .stderr(contains("Cannot load configuration file"));

        Ok(())
    }

    #[test]
    fn test_extract() -> Result<()> {
        let dir = tempdir()?;
        site(dir.path())?;

        main_command!()
            .current_dir(dir.path())
            .arg("extract")
            .assert()
            .success()
            .stdout(contains("INTERNAL LINKS (3):"))
            .stdout(contains("EXTERNAL LINKS (2):"))
            .stdout(contains("https://cdn.example.com/app.js"))
            .stdout(contains("Total href attributes found: 7"));

        Ok(())
    }

    #[test]
    fn test_extract_json() -> Result<()> {
        let dir = tempdir()?;
        site(dir.path())?;

        let output = main_command!()
            .args(["extract", "--format", "json"])
            .arg(dir.path().join("index.html"))
            .output()?;
        assert!(output.status.success());

        let json: Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(json["total"], 7);
        assert_eq!(
            json["categories"]["email"],
            serde_json::json!(["mailto:me@example.com"])
        );
        assert_eq!(json["categories"]["anchor_only"], serde_json::json!(["#main"]));

        Ok(())
    }

    #[test]
    fn test_extract_missing_file() -> Result<()> {
        let dir = tempdir()?;

        main_command!()
            .current_dir(dir.path())
            .arg("extract")
            .assert()
            .code(1)
            .stdout(is_empty());

        Ok(())
    }

    #[test]
    fn test_fix() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        let page = builder.str(
            "index.html",
            r#"<a href="${post.link}">x</a> <a href="nullinfo@example.com">mail</a>"#,
        )?;
        builder.str("clean.html", r#"<a href="/">home</a>"#)?;

        main_command!()
            .arg("fix")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(contains(
                "Fixed: Template variable ${post.link}, Fix email link",
            ))
            .stdout(contains("No changes needed."))
            .stdout(contains("Successfully processed 2/2 files."));

        let fixed = fs::read_to_string(&page)?;
        assert!(fixed.contains(r##"<a href="#">x</a>"##));
        assert!(fixed.contains(r#"<a href="mailto:info@example.com">"#));

        // A second pass finds nothing left to do
        main_command!()
            .arg("fix")
            .arg(&page)
            .assert()
            .success()
            .stdout(contains("No changes needed."));

        Ok(())
    }

    #[test]
    fn test_fix_dry_run() -> Result<()> {
        let dir = tempdir()?;
        let page = DirBuilder::new(dir.path()).str("index.html", r#"<a href="{{src}}">x</a>"#)?;
        let before = fs::read_to_string(&page)?;

        main_command!()
            .args(["fix", "--dry-run"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(contains("Would fix: Template variable {{src}}"));

        assert_eq!(fs::read_to_string(&page)?, before);

        Ok(())
    }

    #[test]
    fn test_fix_with_custom_rules() -> Result<()> {
        let dir = tempdir()?;
        let builder = DirBuilder::new(dir.path());
        let page = builder.str("index.html", r#"<a href="/old/post">x</a>"#)?;
        let config = builder.str(
            "rules.toml",
            r#"
no_builtin_fixes = true

[[fix]]
pattern = 'href="/old/'
replacement = 'href="/new/'
description = "Moved posts"
"#,
        )?;

        main_command!()
            .arg("--config")
            .arg(&config)
            .arg("fix")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(contains("Fixed: Moved posts"));

        assert!(fs::read_to_string(&page)?.contains(r#"href="/new/post""#));

        Ok(())
    }
}
