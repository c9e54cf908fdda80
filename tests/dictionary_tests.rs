use std::io::{Cursor, Write};

use boggle_engine::{load_dictionary, BoggleError, WordList};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "puree\n").unwrap();

    let words = WordList::load(file.path()).unwrap();
    assert!(words.contains("PUREE"));
    assert!(words.contains("puree"));
    assert!(words.contains("PuReE"));
    assert!(!words.contains("zzz"));
    assert_eq!(words.len(), 1);
}

#[test]
fn test_load_trims_and_skips_blank_lines() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "  cat \r\n\n\tdog\n   \nCat\n").unwrap();

    let words = WordList::load(file.path()).unwrap();
    assert_eq!(words.len(), 2);
    assert!(words.contains("cat"));
    assert!(words.contains("DOG"));
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-words.txt");

    match WordList::load(&path) {
        Err(BoggleError::DictionarySourceUnreadable { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected unreadable source, got {:?}", other),
    }
}

#[test]
fn test_from_reader() {
    let words = WordList::from_reader(Cursor::new("alpha\nbeta\n")).unwrap();
    assert!(words.contains("Alpha"));
    assert!(words.contains("BETA"));
    assert!(!words.contains("gamma"));
}

#[test]
fn test_empty_string_is_not_a_word() {
    let words = WordList::parse("a\n\n");
    assert!(words.contains("a"));
    assert!(!words.contains(""));
}

#[test]
fn test_words_stored_uppercase() {
    let words = WordList::parse("hello\nWorld\n");
    let mut stored: Vec<&str> = words.iter().collect();
    stored.sort_unstable();
    assert_eq!(stored, vec!["HELLO", "WORLD"]);
}

#[test]
fn test_score_is_length() {
    assert_eq!(WordList::score("cat"), 3);
    assert_eq!(WordList::score("PUREE"), 5);
    assert_eq!(WordList::score(""), 0);
}

#[test]
fn test_embedded_dictionary() {
    let words = load_dictionary();
    assert!(!words.is_empty());
    assert!(words.contains("puree"));
    assert!(words.contains("CAT"));
    assert!(words.contains("dog"));
}
