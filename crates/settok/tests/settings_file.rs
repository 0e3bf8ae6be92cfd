//! End-to-end tokenization of realistic settings files, including the
//! skip-line recovery loop a caller runs over malformed lines.

use settok::{MAX_TOKEN_LEN, MemorySource, Read, ScanError, TokenBuf, Tokenizer};

/// Tokenizes `input` line by line the way a settings reader does: collect
/// tokens until a line or stream boundary, skip the rest of a line on error.
/// Returns one `Vec` of decoded tokens per non-empty line.
fn lines_of(input: &str) -> Vec<Vec<String>> {
    let mut lexer = Tokenizer::new(MemorySource::new(input));
    let mut storage = [0u8; MAX_TOKEN_LEN];
    let mut lines = Vec::new();
    let mut line: Vec<String> = Vec::new();
    loop {
        let mut token = TokenBuf::new(&mut storage);
        match lexer.read_token(&mut token) {
            Ok(Read::Token) => line.push(token.as_bstr().to_string()),
            Ok(Read::EndOfLine) => {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
            }
            Ok(Read::EndOfStream) => {
                if !line.is_empty() {
                    lines.push(line);
                }
                return lines;
            }
            Err(_) => {
                line.clear();
                if lexer.skip_line() == Read::EndOfStream {
                    return lines;
                }
            }
        }
    }
}

#[test]
fn tokenizes_a_typical_settings_file() {
    let input = "\
# Recent documents and folders
RecentDoc /boot/home/Desktop/notes.txt 12
RecentFolder \"/boot/home/my folder\" 3

RecentApp application/x-vnd.Be-TRAK
RecentDoc /boot/home/mail/draft\\ 2.eml 1
";
    assert_eq!(
        lines_of(input),
        vec![
            vec!["RecentDoc", "/boot/home/Desktop/notes.txt", "12"],
            vec!["RecentFolder", "/boot/home/my folder", "3"],
            vec!["RecentApp", "application/x-vnd.Be-TRAK"],
            vec!["RecentDoc", "/boot/home/mail/draft 2.eml", "1"],
        ]
        .into_iter()
        .map(|l| l.into_iter().map(String::from).collect::<Vec<_>>())
        .collect::<Vec<_>>()
    );
}

#[test]
fn recovery_skips_malformed_lines() {
    let input = "\
good first line
\"unterminated quote on this one
collateral line, consumed by the recovery skip
good again after recovery
trailing\\
";
    // The unterminated quote on line two already consumed that line's
    // newline, so the recovery skip lands past line three; that is the
    // documented cost of line-level recovery. Line four parses normally and
    // line five dies on its escaped newline with nothing left to skip.
    assert_eq!(
        lines_of(input),
        vec![
            vec![
                String::from("good"),
                String::from("first"),
                String::from("line")
            ],
            vec![
                String::from("good"),
                String::from("again"),
                String::from("after"),
                String::from("recovery")
            ],
        ]
    );
}

#[test]
fn comment_only_file_yields_nothing() {
    let input = "# one\n# two\n\n# three";
    assert_eq!(lines_of(input), Vec::<Vec<String>>::new());
}

#[test]
fn error_statuses_surface_before_recovery() {
    let mut lexer = Tokenizer::new(MemorySource::new("key \"value\nover\u{0}long"));
    let mut storage = [0u8; 8];

    let mut token = TokenBuf::new(&mut storage);
    assert_eq!(lexer.read_token(&mut token), Ok(Read::Token));
    assert_eq!(token.as_bytes(), b"key");

    let mut token = TokenBuf::new(&mut storage);
    assert_eq!(
        lexer.read_token(&mut token),
        Err(ScanError::UnterminatedQuotedString)
    );
    assert_eq!(token.as_bytes(), b"value");

    // NUL is ordinary data; the small buffer overflows on the next token.
    let mut token = TokenBuf::new(&mut storage);
    assert_eq!(lexer.read_token(&mut token), Err(ScanError::StringTooLong));
    assert_eq!(token.as_bytes(), b"over\0lo");
    assert_eq!(lexer.skip_line(), Read::EndOfStream);
}
