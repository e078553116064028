use std::io::Write;

use anyhow::Result;
use meny_core::model::{School, SupplierId};

use crate::cli::Format;

pub(crate) fn write_suppliers(
    out: &mut impl Write,
    suppliers: &[(SupplierId, String)],
) -> Result<()> {
    for (id, name) in suppliers {
        writeln!(out, "{id}\t{name}")?;
    }
    Ok(())
}

pub(crate) fn write_schools(
    out: &mut impl Write,
    schools: &[School],
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            for school in schools {
                writeln!(out, "{}\t{}", school.id, school.title)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, schools)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(schools: &[School], format: Format) -> String {
        let mut buffer = Vec::new();
        write_schools(&mut buffer, schools, format).expect("writing to a buffer succeeds");
        String::from_utf8(buffer).expect("output is utf-8")
    }

    #[test]
    fn text_output_is_tab_separated() {
        let schools = [
            School::new("85957002", "P A Fogelström"),
            School::new("3", "Sofia skola"),
        ];
        assert_eq!(
            render(&schools, Format::Text),
            "85957002\tP A Fogelström\n3\tSofia skola\n"
        );
    }

    #[test]
    fn json_output_is_an_array_of_objects() {
        let schools = [School::new("3", "Sofia skola")];
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&schools, Format::Json)).expect("valid json");
        assert_eq!(parsed, serde_json::json!([{ "id": "3", "title": "Sofia skola" }]));
    }

    #[test]
    fn suppliers_are_listed_one_per_line() {
        let mut buffer = Vec::new();
        write_suppliers(
            &mut buffer,
            &[(SupplierId("skolmaten".to_owned()), "Skolmaten".to_owned())],
        )
        .expect("writing to a buffer succeeds");
        assert_eq!(buffer, b"skolmaten\tSkolmaten\n");
    }
}
