// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year captions drawn in the top margin and next to hovered events.

use alloc::format;
use alloc::string::String;

/// Formats a signed year as `"2070 BCE"` or `"618 CE"`.
#[must_use]
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        format!("{year} CE")
    }
}

/// Formats a segment caption, for example `"2070 BCE - 1600 BCE"`.
#[must_use]
pub fn format_span(start_year: i32, end_year: i32) -> String {
    format!("{} - {}", format_year(start_year), format_year(end_year))
}

#[cfg(test)]
mod tests {
    use super::{format_span, format_year};

    #[test]
    fn bce_and_ce() {
        assert_eq!(format_year(-2070), "2070 BCE");
        assert_eq!(format_year(618), "618 CE");
        assert_eq!(format_span(-781, -478), "781 BCE - 478 BCE");
    }
}
