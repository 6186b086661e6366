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

pub(crate) trait FileSystem {
    /// The platform temporary directory, resolved from the environment on
    /// every call.
    fn temp_dir(&self) -> PathBuf;

    /// Atomic create-if-absent: must fail when any entry already occupies
    /// `path`, leaving no partial state behind.
    fn create_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<()>;
}
