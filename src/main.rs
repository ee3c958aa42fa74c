use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use simple_logger::SimpleLogger;

use person_record_sort::reader;
use person_record_sort::record::Record;
use person_record_sort::sort::{
    sort_by_birth_date_asc, sort_by_email_desc_then_last_name_asc, sort_by_last_name_desc,
};

/// Print the three canned sort reports for a file of person records.
#[derive(Parser, Debug)]
#[command(name = "person-report")]
struct Args {
    /// file contain records of data
    #[arg(short = 'f', long = "filename")]
    filename: PathBuf,
}

fn main() -> Result<(), Error> {
    SimpleLogger::new().init()?;
    let args = Args::parse();

    let (_delimiter, records) = reader::read_records_detect(&args.filename)?;

    println!("output 1 - sorted by email (descending), then by last name ascending.");
    print_records(&sort_by_email_desc_then_last_name_asc(&records))?;

    println!("output 2 - sorted by birth date, ascending.");
    print_records(&sort_by_birth_date_asc(&records))?;

    println!("output 3 - sorted by last name, descending.");
    print_records(&sort_by_last_name_desc(&records))?;

    Ok(())
}

fn print_records(records: &[Record]) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
