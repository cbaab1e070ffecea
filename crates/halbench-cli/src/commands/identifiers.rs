// Dweve Halbench - Parser Benchmarking and Halstead Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Identifiers command - prints or validates the identifier table

use colored::Colorize;
use halbench::reporters::format_identifier_table;
use halbench::{HalbenchError, IdentifierMap};
use std::path::Path;

/// Prints the table, or only confirms that it is valid.
pub fn identifiers(table: Option<&Path>, check: bool) -> Result<(), HalbenchError> {
    let map = match table {
        Some(path) => IdentifierMap::load(path)?,
        None => IdentifierMap::builtin()?,
    };

    if check {
        println!(
            "{} Identifier table valid: {} entries",
            "✓".green().bold(),
            map.len()
        );
    } else {
        print!("{}", format_identifier_table(&map));
    }
    Ok(())
}
