//! Alphabet command.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, OutputFormat};

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct SymbolRow {
    #[tabled(rename = "Symbol")]
    symbol: char,

    #[tabled(rename = "Digit")]
    digit: usize,
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let symbols = sfl_serial::alphabet();

    match ctx.format {
        OutputFormat::Table => println!("{}", symbols.iter().collect::<String>()),
        OutputFormat::Json => {
            let rows = rows(symbols);
            print_output(&rows, ctx.format);
        }
    }

    Ok(())
}

fn rows(symbols: &[char]) -> Vec<SymbolRow> {
    symbols
        .iter()
        .enumerate()
        .map(|(idx, symbol)| SymbolRow {
            symbol: *symbol,
            digit: idx + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_start_at_one() {
        let rows = rows(sfl_serial::alphabet());
        assert_eq!(rows.len(), 34);
        assert_eq!((rows[0].symbol, rows[0].digit), ('1', 1));
        assert_eq!((rows[33].symbol, rows[33].digit), ('Z', 34));
    }
}
