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

use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) trait Clock {
    fn epoch_millis(&self) -> u64;
}

#[derive(Debug)]
pub(crate) struct WallClock;

impl Clock for WallClock {
    fn epoch_millis(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as u64,

            // The system clock is set before the Unix epoch.
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mockall::mock! {
    pub(crate) TestClock {}

    impl Clock for TestClock {
        fn epoch_millis(&self) -> u64;
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::{Clock, WallClock};

    #[test]
    fn epoch_millis_is_recent() {
        // 2023-11-14T22:13:20Z.
        assert!(WallClock.epoch_millis() > 1_700_000_000_000);
    }
}
