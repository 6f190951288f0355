use std::process::Command;
use std::path::Path;
use anyhow::Result;

const HEADER: &str = "Filial,Data,NUMERARIO,TIPO,Valor,Natureza,Banco,Agencia,Conta,NUM CHEQUE,Historico,C. Custo debito,C. Custo credito,Item debito,Item credito,Cl Valor deb,Cl Valor crd";

#[test]
fn test_cli_outputs_consolidated_statement() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_statement-consolidator");
    let sample_path = Path::new("samples").join("statement.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines, vec![
        HEADER,
        "0099,2024-03-15,CD,R,2000.00,101118,341,1234,55,,CIELO,,,,,,",
        "0099,2024-03-15,CD,R,100.00,101117,341,1234,55,,TEDPAGSEG,,,,,,",
        "0099,2024-03-16,CD,R,1250.10,101115,341,1234,55,,CREDZ,,,,,,",
        "0099,2024-03-16,CD,R,320.40,101111,341,1234,55,,REDE,,,,,,",
        "0100,2024-03-16,CD,R,210.00,A10801,041,5678,777,,BANRISUL,,,,,,",
        "0100,2024-03-16,CD,R,90.00,101113,041,5678,777,,BIN,,,,,,",
        "0100,2024-03-17,CD,R,0.00,101119,041,5678,777,,SFPAY,,,,,,",
        "0100,2024-03-17,CD,R,15.50,101117,041,5678,777,,SISPAG PAGSEG,,,,,,",
    ]);

    Ok(())
}

#[test]
fn test_cli_rows_have_fixed_column_count() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_statement-consolidator");
    let sample_path = Path::new("samples").join("statement.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .arg("debug")
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    for line in stdout.lines() {
        assert_eq!(line.split(',').count(), 17, "line: {line}");
    }

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("amount [abc] could not be parsed"));

    Ok(())
}

#[test]
fn test_cli_fails_on_malformed_statement() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_statement-consolidator");
    let fixture_path = Path::new("samples").join("missing_columns.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Rejected statement"));
    assert!(stderr.contains("Malformed statement"));
    assert!(stderr.contains("Conta"));
    assert!(stderr.contains("Valor"));

    Ok(())
}

#[test]
fn test_cli_reports_unreadable_statement_as_runtime_failure() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_statement-consolidator");
    let fixture_path = Path::new("samples").join("does_not_exist.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Could not consolidate statement"));
    assert!(!stderr.contains("Malformed statement"));

    Ok(())
}

#[test]
fn test_cli_requires_an_input_path() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_statement-consolidator");

    let output = Command::new(binary_path).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.starts_with("Usage:"));

    Ok(())
}
