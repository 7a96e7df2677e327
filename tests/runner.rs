use csv2seed::{run, Config, Profile};
use std::fs;
use std::path::Path;

const EXPORT: &str = "\
outlet_id,name,phone,email,address,notes,credit_limit,outstanding_balance,is_active,created_by,referred_by,internal_customer_id,customer_code
o1,O'Brien,,,\"12 High St
Leeds\",,500,,true,,,C-1,K1
o1,Ann,555,ann@example.com,,NULL,,10,,u-9,NULL,C-2,
";

fn config_for(dir: &Path, profile: Profile) -> Config {
    Config {
        input: dir.join("customers_rows.csv"),
        output: dir.join("supabase").join("seed.sql"),
        profile,
        ..Config::default()
    }
}

#[test]
fn conflict_safe_end_to_end() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), EXPORT)?;
    let config = config_for(tmp.path(), Profile::ConflictSafe);

    let report = run(&config)?;
    assert_eq!(report.records, 2);

    let out = fs::read_to_string(&config.output)?;
    assert!(out.starts_with(
        "-- Customer data seed file\n-- Generated from customers_rows.csv with duplicate handling\n"
    ));
    assert!(out.contains(
        "VALUES ('o1', 'O''Brien', NULL, NULL, '12 High St\nLeeds', NULL, 500, 0, TRUE, NULL, NULL, 'C-1', 'K1') \
         ON CONFLICT (internal_customer_id) DO NOTHING;\n"
    ));
    assert!(out.contains(
        "VALUES ('o1', 'Ann', '555', 'ann@example.com', NULL, NULL, 0, 10, TRUE, 'u-9', NULL, 'C-2', NULL) \
         ON CONFLICT (internal_customer_id) DO NOTHING;\n"
    ));
    assert!(out.ends_with("\n-- Total: 2 customer records\n"));
    Ok(())
}

#[test]
fn batched_end_to_end() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), EXPORT)?;
    let config = config_for(tmp.path(), Profile::Batched);

    let report = run(&config)?;
    assert_eq!(report.records, 2);

    let out = fs::read_to_string(&config.output)?;
    assert!(out.contains("-- Total records: 2\n"));
    assert!(out.contains("\n-- Batch 1 (rows 1-2)\n"));
    assert!(out.contains(
        "VALUES ('o1', 'O''Brien', '', '', '12 High St Leeds', '', 500, 0, true, NULL);\n"
    ));
    assert!(out.contains(
        "VALUES ('o1', 'Ann', '555', 'ann@example.com', '', 'NULL', 0, 10, TRUE, 'u-9');\n"
    ));
    assert!(!out.contains("ON CONFLICT"));
    assert!(!out.contains("-- Total:"));
    Ok(())
}

#[test]
fn output_is_byte_identical_across_runs() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), EXPORT)?;
    for profile in [Profile::Batched, Profile::ConflictSafe] {
        let config = config_for(tmp.path(), profile);
        run(&config)?;
        let first = fs::read(&config.output)?;
        run(&config)?;
        let second = fs::read(&config.output)?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn header_only_export() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), "outlet_id,name\n")?;
    let config = config_for(tmp.path(), Profile::ConflictSafe);

    let report = run(&config)?;
    assert_eq!(report.records, 0);
    let out = fs::read_to_string(&config.output)?;
    assert!(!out.contains("INSERT"));
    assert!(out.ends_with("-- Total: 0 customer records\n"));
    Ok(())
}

#[test]
fn missing_input_creates_no_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_for(tmp.path(), Profile::ConflictSafe);

    let err = run(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("customers_rows.csv"));
    assert!(!config.output.exists());
}

#[test]
fn metrics_json_is_written() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), EXPORT)?;
    let metrics_path = tmp.path().join("metrics.json");
    let config = Config {
        metrics_json: Some(metrics_path.clone()),
        ..config_for(tmp.path(), Profile::ConflictSafe)
    };

    run(&config)?;
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&metrics_path)?)?;
    assert_eq!(json["records"], 2);
    assert_eq!(json["statements"], 2);
    assert_eq!(json["batch_comments"], 0);
    assert!(json.get("execution_time_ms").is_some());
    Ok(())
}

#[test]
fn custom_table_reaches_statements_and_header() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("customers_rows.csv"), EXPORT)?;
    let config = Config {
        table: "public.customers".into(),
        ..config_for(tmp.path(), Profile::Batched)
    };

    run(&config)?;
    let out = fs::read_to_string(&config.output)?;
    assert!(out.contains("-- TRUNCATE TABLE public.customers CASCADE;"));
    assert_eq!(out.matches("INSERT INTO public.customers (").count(), 2);
    Ok(())
}
