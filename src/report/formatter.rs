use crate::error::Result;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Tabled>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());

        table.to_string()
    }
}

/// CSV formatter; column headers come from the serialized field names.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn format<T: Serialize>(items: &[T]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for item in items {
            writer.serialize(item)?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvFormatter, PrettyFormatter};
    use crate::report::collect;
    use crate::system::LSystem;

    #[test]
    fn csv_has_header_and_one_row_per_generation() {
        let algae = LSystem::algae();
        let csv = CsvFormatter::format(&collect(algae.axiom(), algae.rules(), 2)).unwrap();

        assert_eq!(
            csv,
            "Generation,Length,Rewritten,Passed Through\n0,1,1,0\n1,2,2,0\n2,3,3,0\n"
        );
    }

    #[test]
    fn pretty_table_lists_every_generation() {
        let koch = LSystem::koch_curve();
        let table = PrettyFormatter::format(&collect(koch.axiom(), koch.rules(), 2));

        assert!(table.contains("Generation"));
        assert!(table.contains("Passed Through"));
        // F+F-F-F+F expanded twice: 25 letters and 24 signs.
        assert!(table.contains("49"));
    }

    #[test]
    fn empty_input_formats_to_nothing() {
        let empty: Vec<crate::report::GenerationStats> = Vec::new();

        assert_eq!(PrettyFormatter::format(&empty), "");
    }
}
