//! YAML export

use std::io::Write;

use crate::context::FinanceSnapshot;
use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

pub fn export_full_yaml<W: Write>(snapshot: &FinanceSnapshot, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    writeln!(writer, "# fintrack export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "# Contains all of your financial records; keep it private.")
        .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)
}

pub fn read_yaml_export(yaml: &str) -> FinanceResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml).map_err(export_err)?;
    export.validate().map_err(FinanceError::Export)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::tests::sample_snapshot;

    #[test]
    fn test_yaml_export() {
        let mut out = Vec::new();
        export_full_yaml(&sample_snapshot(), &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.starts_with("# fintrack export"));
        assert!(yaml.contains("HDFC"));

        let export = read_yaml_export(&yaml).unwrap();
        assert_eq!(export.transactions.len(), 2);
    }
}
