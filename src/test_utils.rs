use crate::CivilTime;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn civil_date(year: u16, month: u8, day: u8) -> CivilTime {
    CivilTime::from_fields(year, month, day, 0, 0, 0, 0)
}

pub fn civil(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8, microsecond: u32) -> CivilTime {
    CivilTime::from_fields(year, month, day, hour, minute, second, microsecond)
}

pub fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 2 && crate::days_in_year(i32::from(year)) == 366 {
        29
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
