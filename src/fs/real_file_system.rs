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

use std::io;
use std::path::{Path, PathBuf};

use crate::fs::file_system::FileSystem;

#[derive(Debug)]
pub(crate) struct RealFileSystem {}

impl RealFileSystem {
    pub(crate) fn new() -> RealFileSystem {
        RealFileSystem {}
    }
}

impl FileSystem for RealFileSystem {
    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }

    fn create_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        // mkdir(2): fails with AlreadyExists when any entry occupies the
        // path, with no window for a concurrent actor in between.
        std::fs::create_dir(path)
    }
}
