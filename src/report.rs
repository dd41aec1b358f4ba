//! Reporting of collected values.

use crate::Result;
use std::io::Write;

/// Write one line per value, in ascending index order.
///
/// The line format is `The value in {index} is {value}.` with the index
/// counted from zero.
pub fn report<W: Write>(output: &mut W, values: &[i64]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        writeln!(output, "The value in {index} is {value}.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(values: &[i64]) -> String {
        let mut output = Vec::new();
        report(&mut output, values).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn reports_each_value_with_its_position() {
        assert_eq!(
            render(&[5, 7, 9]),
            "The value in 0 is 5.\nThe value in 1 is 7.\nThe value in 2 is 9.\n"
        );
    }

    #[test]
    fn negative_values_render_as_entered() {
        assert_eq!(render(&[-1]), "The value in 0 is -1.\n");
    }

    #[test]
    fn empty_sequence_reports_nothing() {
        assert_eq!(render(&[]), "");
    }
}
