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

use std::path::PathBuf;

use log::{debug, error};
use thiserror::Error;

use crate::clock::{Clock, WallClock};
use crate::fs::file_system::FileSystem;
use crate::fs::real_file_system::RealFileSystem;
use crate::names::temp_dir_name;

/// Maximum loop count when creating temp directories.
const TEMP_DIR_ATTEMPTS: u32 = 10_000;

#[derive(Error, Debug)]
pub enum TempDirError {
    #[error("failed to create directory within {attempts} attempts (tried {first} to {last})")]
    Exhausted {
        attempts: u32,
        first: String,
        last: String,
    },
}

/// Atomically creates a new directory somewhere beneath the system's
/// temporary directory and returns its path.
///
/// Creating a temp file, deleting it, and making a directory in its place is
/// racy and exploitable, especially when executables are to be written into
/// the directory. This relies on the atomic create-if-absent of `mkdir`
/// instead: a candidate occupied by a concurrent actor only costs one
/// attempt. Candidate names are the current milliseconds since the Unix
/// epoch followed by `-` and an attempt counter; after 10,000 occupied
/// candidates the call gives up with [`TempDirError::Exhausted`].
///
/// The caller owns the returned directory, including its removal. The
/// temporary volume is assumed writable: a missing or unwritable base
/// directory surfaces through the same exhaustion error, with individual
/// attempt failures not differentiated.
pub fn create_temp_dir() -> Result<PathBuf, TempDirError> {
    create_temp_dir_with(&RealFileSystem::new(), &WallClock, TEMP_DIR_ATTEMPTS)
}

fn create_temp_dir_with(
    fs: &impl FileSystem,
    clock: &impl Clock,
    max_attempts: u32,
) -> Result<PathBuf, TempDirError> {
    let base_dir = fs.temp_dir();
    let created_ms = clock.epoch_millis();

    for attempt in 0..max_attempts {
        let candidate = base_dir.join(temp_dir_name(created_ms, attempt));
        match fs.create_dir(&candidate) {
            Ok(()) => {
                debug!("created temp directory {:?}", candidate);
                return Ok(candidate);
            }

            // Collision, permission error, or missing base directory -- not
            // told apart, the next candidate is tried regardless.
            Err(_) => continue,
        }
    }

    error!(
        "failed to create a temp directory in {:?} within {} attempts",
        base_dir, max_attempts
    );
    Err(TempDirError::Exhausted {
        attempts: max_attempts,
        first: temp_dir_name(created_ms, 0),
        last: temp_dir_name(created_ms, max_attempts - 1),
    })
}
