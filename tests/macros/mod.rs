use outcome_rail::{accept, capture, Outcome};

#[derive(Debug, PartialEq)]
enum ConfigError {
    Parse,
    Missing(&'static str),
}

impl From<std::num::ParseIntError> for ConfigError {
    fn from(_: std::num::ParseIntError) -> Self {
        ConfigError::Parse
    }
}

#[test]
fn test_capture_wraps_single_expression() {
    let ok: Outcome<u16, std::num::ParseIntError> = capture!("80".parse());
    let err: Outcome<u16, std::num::ParseIntError> = capture!("eighty".parse());

    assert_eq!(ok, Outcome::Accepted(80));
    assert!(err.is_rejected());
}

#[test]
fn test_capture_block_supports_question_mark() {
    let lookup = |key: &'static str| -> Outcome<u16, ConfigError> {
        capture!({
            let raw = match key {
                "port" => "8080",
                "bad" => "x",
                _ => return Err(ConfigError::Missing(key)),
            };
            let port: u16 = raw.parse()?;
            Ok(port)
        })
    };

    assert_eq!(lookup("port"), Outcome::Accepted(8080));
    assert_eq!(lookup("bad"), Outcome::Rejected(ConfigError::Parse));
    assert_eq!(lookup("host"), Outcome::Rejected(ConfigError::Missing("host")));
}

#[test]
fn test_accept_builds_present_or_empty() {
    let present: Outcome<&str, ()> = accept!("v");
    let empty: Outcome<&str, ()> = accept!(opt None);
    let some: Outcome<&str, ()> = accept!(opt Some("w"),);

    assert_eq!(present, Outcome::Accepted("v"));
    assert_eq!(empty, Outcome::Empty);
    assert_eq!(some, Outcome::Accepted("w"));
}
