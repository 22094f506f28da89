use std::env;
use std::process::ExitCode;

use chrono::NaiveDate;

use holidaycheck::manager::manager::IManager;
use holidaycheck::manager::managererror::ManagerError;
use holidaycheck::time::holiday::holidaycheckermanager::HolidayCheckerManager;

const USAGE: &str = "usage: holidaycheck <config.json> <checker-name> <YYYY-MM-DD>";

fn run(config_path: &str, checker_name: &str, d: NaiveDate) -> Result<(), ManagerError> {
    let mut manager = HolidayCheckerManager::new();
    manager.from_path(config_path)?;
    let checker = manager.get(checker_name)?;

    match checker.check(d)? {
        Some(holiday) => {
            let kind = if holiday.is_holiday() { "holiday" } else { "observance" };
            println!("{}: {} ({})", holiday.date(), holiday.name(), kind);
        },
        None => println!("{}: no observance", d)
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [config_path, checker_name, date] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let d = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(error) => {
            eprintln!("invalid date '{}': {}", date, error);
            return ExitCode::from(2);
        }
    };

    match run(config_path, checker_name, d) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
