/*
 * Copyright 2024 Ivan Yurchenko
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use lazy_static::lazy_static;
use regex::Regex;
use std::ffi::OsString;
use std::str::FromStr;

lazy_static! {
    static ref TEMP_DIR_NAME_RE: Regex = Regex::new(r"^(\d+)-(\d+)$").unwrap();
}

pub(crate) fn temp_dir_name(created_ms: u64, attempt: u32) -> String {
    return format!("{}-{}", created_ms, attempt);
}

/// Recovers the creation timestamp (milliseconds since the Unix epoch) from
/// the name of a directory produced by [`create_temp_dir`](crate::create_temp_dir).
///
/// Returns `None` for names this crate did not produce.
pub fn creation_millis_from_dir_name(file_name: OsString) -> Option<u64> {
    match file_name.to_str() {
        Some(s) => match TEMP_DIR_NAME_RE.captures(s) {
            Some(captures) => {
                // Safe to unwrap: we know the groups 1 and 2 exist.
                let millis = captures.get(1).unwrap().as_str();
                let attempt = captures.get(2).unwrap().as_str();
                // The attempt counter must fit its type as well.
                u32::from_str(attempt).ok()?;
                u64::from_str(millis).ok()
            }

            None => None,
        },

        // Unsupported symbols -- for sure it's not a name of ours, skipping.
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use rstest::rstest;

    use crate::names::{creation_millis_from_dir_name, temp_dir_name};

    #[rstest]
    #[case(0, 0, "0-0")]
    #[case(1700000000000, 0, "1700000000000-0")]
    #[case(1700000000000, 9999, "1700000000000-9999")]
    fn test_temp_dir_name(#[case] created_ms: u64, #[case] attempt: u32, #[case] expected: String) {
        assert_eq!(temp_dir_name(created_ms, attempt), expected);
    }

    #[rstest]
    #[case("0-0", Some(0))]
    #[case("1700000000000-0", Some(1700000000000))]
    #[case("1700000000000-9999", Some(1700000000000))]
    #[case("1700000000000", None)]
    #[case("1700000000000-", None)]
    #[case("-0", None)]
    #[case("a-0", None)]
    #[case("1700000000000-b", None)]
    #[case("1700000000000-0.tmp", None)]
    #[case("99999999999999999999-0", None)] // too big
    #[case("1700000000000-99999999999", None)] // attempt too big
    #[case(unsafe { OsString::from_encoded_bytes_unchecked(vec ! [0x9f]) }, None)] // invalid UTF
    fn test_creation_millis_from_dir_name(
        #[case] input: OsString,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(creation_millis_from_dir_name(input), expected);
    }
}
