// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  The border rules of the
/// cumulative map and the seam walkers are tables of "if this offset
/// exists take it, else take infinity", and `cargo fmt` spreads every
/// `if` across five lines.  This keeps each rule on a single line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
