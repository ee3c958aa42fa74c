use person_record_sort::record::Record;

#[allow(dead_code)]
pub fn record(last: &str, first: &str, email: &str, color: &str, born: &str) -> Record {
    Record {
        last_name: last.to_string(),
        first_name: first.to_string(),
        email: email.to_string(),
        favorite_color: color.to_string(),
        date_of_birth: born.to_string(),
    }
}

/// The five records every delimiter fixture file parses to, in file order.
#[allow(dead_code)]
pub fn expected_records() -> Vec<Record> {
    vec![
        record("Jones", "Eric", "ejones@example.com", "blue", "02/01/1991"),
        record("Lewis", "Damian", "dlewis@example.com", "red", "02/02/1992"),
        record("West", "Adam", "awest@example.com", "green", "02/03/1993"),
        record("Robinson", "Nate", "nrobinson@example.com", "yellow", "02/04/1994"),
        record("Buck", "Ken", "kbuck@example.com", "orange", "02/05/1995"),
    ]
}

#[allow(dead_code)]
pub fn last_names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.last_name.as_str()).collect()
}
