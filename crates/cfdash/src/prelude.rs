pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Result};

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};

/// Borderless table with a rule under the title row
pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = FormatBuilder::new()
        .column_separator(' ')
        .separators(&[LinePosition::Title], LineSeparator::new('-', ' ', ' ', ' '))
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}
