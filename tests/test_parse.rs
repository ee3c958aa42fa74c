use person_record_sort::delimiter::Delimiter;
use person_record_sort::record::Record;

mod common;

#[test]
fn test_parse_space_delimited_lines() {
    let lines = [
        "Jones Eric ejones@example.com blue 02/01/1991",
        "Lewis Damian dlewis@example.com red 02/02/1992",
        "West Adam awest@example.com green 02/03/1993",
        "Robinson Nate nrobinson@example.com yellow 02/04/1994",
        "Buck Ken kbuck@example.com orange 02/05/1995",
    ];
    for (line, expected) in lines.iter().zip(common::expected_records()) {
        assert_eq!(Record::parse(line, Delimiter::Space), expected);
    }
}

#[test]
fn test_parse_comma_delimited_lines() {
    let lines = [
        "Jones,Eric,ejones@example.com,blue,02/01/1991",
        "Lewis,Damian,dlewis@example.com,red,02/02/1992",
        "West,Adam,awest@example.com,green,02/03/1993",
        "Robinson,Nate,nrobinson@example.com,yellow,02/04/1994",
        "Buck,Ken,kbuck@example.com,orange,02/05/1995",
    ];
    for (line, expected) in lines.iter().zip(common::expected_records()) {
        assert_eq!(Record::parse(line, Delimiter::Comma), expected);
    }
}

#[test]
fn test_parse_pipe_delimited_lines() {
    let lines = [
        "Jones|Eric|ejones@example.com|blue|02/01/1991",
        "Lewis|Damian|dlewis@example.com|red|02/02/1992",
        "West|Adam|awest@example.com|green|02/03/1993",
        "Robinson|Nate|nrobinson@example.com|yellow|02/04/1994",
        "Buck|Ken|kbuck@example.com|orange|02/05/1995",
    ];
    for (line, expected) in lines.iter().zip(common::expected_records()) {
        assert_eq!(Record::parse(line, Delimiter::Pipe), expected);
    }
}

#[test]
fn test_parse_short_line_leaves_trailing_fields_empty() {
    let record = Record::parse("Jones,Eric,ejones@example.com", Delimiter::Comma);
    assert_eq!(record.last_name, "Jones");
    assert_eq!(record.first_name, "Eric");
    assert_eq!(record.email, "ejones@example.com");
    assert_eq!(record.favorite_color, "");
    assert_eq!(record.date_of_birth, "");
}

#[test]
fn test_parse_long_line_discards_extra_fields() {
    let record = Record::parse(
        "Jones|Eric|ejones@example.com|blue|02/01/1991|extra|fields",
        Delimiter::Pipe,
    );
    assert_eq!(
        record,
        common::record("Jones", "Eric", "ejones@example.com", "blue", "02/01/1991")
    );
}

#[test]
fn test_parse_does_not_trim() {
    // fields keep their whitespace verbatim
    let record = Record::parse("Jones, Eric,ejones@example.com,blue,02/01/1991", Delimiter::Comma);
    assert_eq!(record.first_name, " Eric");
}

#[test]
fn test_record_serializes_with_camel_case_names() -> Result<(), anyhow::Error> {
    let record = common::record("Jones", "Eric", "ejones@example.com", "blue", "02/01/1991");
    let value = serde_json::to_value(&record)?;
    assert_eq!(value["lastName"], "Jones");
    assert_eq!(value["firstName"], "Eric");
    assert_eq!(value["email"], "ejones@example.com");
    assert_eq!(value["favoriteColor"], "blue");
    assert_eq!(value["dateOfBirth"], "02/01/1991");
    Ok(())
}
