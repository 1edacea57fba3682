use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_creates_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "Login.cs",
        r#"public string Title => t("Please sign in");"#,
    )?;

    let output = test.extract_command("t", "fr").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("POs/fr.po")?,
        "#: Login.cs\r\nmsgid \"Please sign in\"\r\nmsgstr \"\"\r\n\r\n"
    );
    assert_eq!(
        stdout(&output),
        "\u{2713} Wrote 1 new entry from 1 file to ./POs/fr.po (scanned 1 source file)\n"
    );

    Ok(())
}

#[test]
fn test_extract_twice_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Login.cs", r#"t("Please sign in"); t("Save");"#)?;
    test.write_file(
        "Views/Home.aspx",
        "<%= t(\"Welcome \" +\n    \"back\") %>\n<%= t(\"Save\") %>",
    )?;
    test.write_file("Views/Site.Master", r#"<%$ Code: t("Search") %>"#)?;

    let first = test.extract_command("t", "de").output()?;
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    let catalog = test.read_file("POs/de.po")?;
    assert_eq!(catalog.matches("msgid").count(), 4);
    assert!(catalog.contains("msgid \"Welcome back\""));

    let second = test.extract_command("t", "de").output()?;
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert_eq!(test.read_file("POs/de.po")?, catalog);
    assert!(stdout(&second).contains("no new entries"));

    Ok(())
}

#[test]
fn test_extract_appends_new_keys_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "POs/fr.po",
        "#: Main.cs\r\nmsgid \"Save\"\r\nmsgstr \"Enregistrer\"\r\n\r\n",
    )?;
    test.write_file("Main.cs", r#"t("Save"); t("Cancel");"#)?;

    let output = test.extract_command("t", "fr").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("POs/fr.po")?,
        "#: Main.cs\r\nmsgid \"Save\"\r\nmsgstr \"Enregistrer\"\r\n\r\n\
         #: Main.cs\r\nmsgid \"Cancel\"\r\nmsgstr \"\"\r\n\r\n"
    );
    assert!(stdout(&output).starts_with("\u{2713} Appended 1 new entry"));

    Ok(())
}

#[test]
fn test_extract_respects_exclusion_boundary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("obj/Generated.cs", r#"t("Generated")"#)?;
    test.write_file("obj/Debug/Nested.cs", r#"t("Nested")"#)?;
    test.write_file("bin/Tool.cs", r#"t("Tool")"#)?;
    test.write_file("Main.cs", r#"t("Main")"#)?;

    let output = test
        .extract_command("t", "fr")
        .arg("obj,bin")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let catalog = test.read_file("POs/fr.po")?;
    assert!(catalog.contains("msgid \"Main\""));
    assert!(catalog.contains("msgid \"Nested\""));
    assert!(!catalog.contains("msgid \"Generated\""));
    assert!(!catalog.contains("msgid \"Tool\""));

    Ok(())
}

#[test]
fn test_extract_without_matches_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("Main.cs", "var x = Translate(\"Save\");")?;

    let output = test.extract_command("t", "fr").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!test.root().join("POs/fr.po").exists());
    assert!(test.root().join("POs").is_dir());

    Ok(())
}

#[test]
fn test_extract_custom_include() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("page.cshtml", r#"@_("Hello")"#)?;
    test.write_file("Main.cs", r#"_("Ignored")"#)?;

    let output = test
        .extract_command("_", "fr")
        .args(["--include", "*.cshtml"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("POs/fr.po")?,
        "#: page.cshtml\r\nmsgid \"Hello\"\r\nmsgstr \"\"\r\n\r\n"
    );

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xtextrc.json",
        r#"{ "includes": ["*.vb"], "excludes": ["Legacy"], "catalogDir": "locale" }"#,
    )?;
    test.write_file("Form.vb", r#"T("Open")"#)?;
    test.write_file("Legacy/Old.vb", r#"T("Old")"#)?;

    let output = test.extract_command("T", "it").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("locale/it.po")?,
        "#: Form.vb\r\nmsgid \"Open\"\r\nmsgstr \"\"\r\n\r\n"
    );

    Ok(())
}

#[test]
fn test_extract_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_file("Main.cs", r#"t("Save")"#)?;

    let output = test.extract_command("t", "fr").arg("-v").output()?;

    assert!(output.status.success());
    let log = stderr(&output);
    assert!(log.contains("No .xtextrc.json found"));
    assert!(log.contains("Main.cs (1 found, 1 new)"));

    Ok(())
}

#[test]
fn test_extract_malformed_function_name_fails_before_writing() -> Result<()> {
    let test = CliTest::with_file("Main.cs", r#"t("Save")"#)?;

    let output = test.extract_command("t(", "fr").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid function name"));
    assert!(!test.root().join("POs").exists());

    Ok(())
}

#[test]
fn test_extract_unreadable_source_fails() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::write(test.root().join("Broken.cs"), [0xff, 0xfe, 0xfd])?;

    let output = test.extract_command("t", "fr").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read source file"));

    Ok(())
}

#[test]
fn test_extract_missing_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["extract", "t", "missing", "fr"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Root folder does not exist"));

    Ok(())
}

#[test]
fn test_extract_excludes_resolve_against_working_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/obj/Generated.cs", r#"t("Generated")"#)?;
    test.write_file("site/Main.cs", r#"t("Main")"#)?;

    let output = test
        .command()
        .args(["extract", "t", "site", "fr", "site/obj"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let catalog = test.read_file("site/POs/fr.po")?;
    assert!(catalog.contains("msgid \"Main\""));
    assert!(!catalog.contains("msgid \"Generated\""));

    Ok(())
}
