use csv2seed::{CustomerRecord, Profile, RowSerializer};

fn obrien() -> CustomerRecord {
    CustomerRecord::from_pairs([
        ("outlet_id", "o1"),
        ("name", "O'Brien"),
        ("phone", ""),
        ("credit_limit", "500"),
    ])
}

fn full_record() -> CustomerRecord {
    CustomerRecord::from_pairs([
        ("outlet_id", "o-42"),
        ("name", "Ann"),
        ("phone", "555-0100"),
        ("email", "ann@example.com"),
        ("address", "1 Main St\r\nSpringfield"),
        ("notes", "pays 'late'"),
        ("credit_limit", "1000"),
        ("outstanding_balance", "250"),
        ("is_active", "false"),
        ("created_by", "u-1"),
        ("referred_by", "NULL"),
        ("internal_customer_id", "C-0001"),
        ("customer_code", "  "),
    ])
}

#[test]
fn batched_uses_empty_strings_and_defaults() {
    let sql = RowSerializer::new(Profile::Batched, "customers").serialize(&obrien());
    assert_eq!(
        sql,
        "INSERT INTO customers (outlet_id, name, phone, email, address, notes, credit_limit, \
         outstanding_balance, is_active, created_by) VALUES ('o1', 'O''Brien', '', '', '', '', \
         500, 0, TRUE, NULL);"
    );
}

#[test]
fn conflict_safe_uses_null_and_conflict_clause() {
    let sql = RowSerializer::new(Profile::ConflictSafe, "customers").serialize(&obrien());
    assert_eq!(
        sql,
        "INSERT INTO customers (outlet_id, name, phone, email, address, notes, credit_limit, \
         outstanding_balance, is_active, created_by, referred_by, internal_customer_id, \
         customer_code) VALUES ('o1', 'O''Brien', NULL, NULL, NULL, NULL, 500, 0, TRUE, NULL, \
         NULL, NULL, NULL) ON CONFLICT (internal_customer_id) DO NOTHING;"
    );
}

#[test]
fn batched_flattens_address_line_breaks() {
    let sql = RowSerializer::new(Profile::Batched, "customers").serialize(&full_record());
    assert!(sql.contains("'1 Main St  Springfield'"));
    assert!(sql.contains("'pays ''late'''"));
    assert!(sql.contains("1000, 250, false, 'u-1');"));
}

#[test]
fn conflict_safe_keeps_line_breaks_and_upper_cases_booleans() {
    let sql = RowSerializer::new(Profile::ConflictSafe, "customers").serialize(&full_record());
    assert!(sql.contains("'1 Main St\r\nSpringfield'"));
    assert!(sql.contains("1000, 250, FALSE, 'u-1', NULL, 'C-0001', NULL)"));
}

#[test]
fn null_marker_is_literal_text_in_batched() {
    let record = CustomerRecord::from_pairs([("notes", "null"), ("created_by", "NULL")]);
    let sql = RowSerializer::new(Profile::Batched, "customers").serialize(&record);
    assert!(sql.contains("'null', 0, 0, TRUE, 'NULL');"));
}

#[test]
fn whitespace_only_text_is_kept_in_batched() {
    let record = CustomerRecord::from_pairs([("phone", "  ")]);
    let sql = RowSerializer::new(Profile::Batched, "customers").serialize(&record);
    assert!(sql.contains("VALUES ('', '', '  ', '', '', ''"));
}

#[test]
fn blank_numeric_and_boolean_cells_fall_back() {
    let record = CustomerRecord::from_pairs([
        ("credit_limit", " "),
        ("outstanding_balance", ""),
        ("is_active", ""),
    ]);
    for profile in [Profile::Batched, Profile::ConflictSafe] {
        let row = RowSerializer::new(profile, "customers").serialize_row(&record);
        assert!(row.statement.contains("0, 0, TRUE"), "{}", row.statement);
        assert_eq!(row.rendered.defaulted, 3);
    }
}

#[test]
fn conflict_safe_counts_nulls() {
    let row = RowSerializer::new(Profile::ConflictSafe, "customers").serialize_row(&obrien());
    // phone, email, address, notes, created_by, referred_by, internal_customer_id, customer_code
    assert_eq!(row.rendered.null_count(), 8);
    assert_eq!(row.rendered.values.len(), Profile::ConflictSafe.columns().len());
}

#[test]
fn custom_table_name() {
    let sql = RowSerializer::new(Profile::Batched, "staging.customers").serialize(&obrien());
    assert!(sql.starts_with("INSERT INTO staging.customers ("));
}

#[test]
fn every_quote_is_doubled() {
    let record = CustomerRecord::from_pairs([("name", "'a'b''c'")]);
    for profile in [Profile::Batched, Profile::ConflictSafe] {
        let sql = RowSerializer::new(profile, "customers").serialize(&record);
        assert!(sql.contains("'''a''b''''c'''"), "{}", sql);
    }
}
