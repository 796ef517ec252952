use decklist_converter::io::{read_decklist, write_output};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Test fixtures - sample data for testing

fn create_sample_decklist_content() -> String {
    r#"4 Polluted Delta [ONS]
1 Llanowar Elves (DOM)

Sideboard
2 Jace, the Mind Sculptor [WWK]"#
        .to_string()
}

// Tests for read_decklist function

#[test]
fn test_read_decklist_valid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", create_sample_decklist_content()).unwrap();

    let lines = read_decklist(temp_file.path()).unwrap();

    // Blank and header lines are kept; filtering is the parser's job
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "4 Polluted Delta [ONS]");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Sideboard");
}

#[test]
fn test_read_decklist_nonexistent_file() {
    let result = read_decklist("/this/file/does/not/exist.txt");
    assert!(result.is_err());
}

#[test]
fn test_read_decklist_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();

    let lines = read_decklist(temp_file.path()).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_read_decklist_crlf_line_endings() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "4 Polluted Delta [ONS]\r\n1 Island [UNF]\r\n").unwrap();

    let lines = read_decklist(temp_file.path()).unwrap();
    assert_eq!(lines, vec!["4 Polluted Delta [ONS]", "1 Island [UNF]"]);
}

#[test]
fn test_read_decklist_unicode() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "1 Jötun Grunt [CSP]\n1 Lim-Dûl's Vault [ALL]").unwrap();

    let lines = read_decklist(temp_file.path()).unwrap();
    assert_eq!(lines[0], "1 Jötun Grunt [CSP]");
    assert_eq!(lines[1], "1 Lim-Dûl's Vault [ALL]");
}

#[test]
fn test_read_decklist_invalid_utf8() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(&[b'1', b' ', 0xff, 0xfe, b'\n']).unwrap();

    assert!(read_decklist(temp_file.path()).is_err());
}

// Tests for write_output function

#[test]
fn test_write_output_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("output.csv");

    write_output(&path, "Polluted Delta,Onslaught,0,4\n").unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Polluted Delta,Onslaught,0,4\n"
    );
}

#[test]
fn test_write_output_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output.txt");
    std::fs::write(&path, "old contents that are longer").unwrap();

    write_output(&path, "1 Island | UNF").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 Island | UNF");
}
