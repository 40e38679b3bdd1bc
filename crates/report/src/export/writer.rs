use crate::export::workbook::{Cell, Workbook};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, XlsxError};
use shared::errors::ServiceError;
use tracing::error;

fn render(workbook: &Workbook) -> Result<Vec<u8>, XlsxError> {
    let mut xlsx = XlsxWorkbook::new();
    let title = Format::new().set_bold();

    for sheet in &workbook.sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let row_num = row_idx as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                let col_num = col_idx as u16;
                match cell {
                    Cell::Text(value) if row_idx == 0 => {
                        worksheet.write_string_with_format(row_num, col_num, value, &title)?;
                    }
                    Cell::Text(value) => {
                        worksheet.write_string(row_num, col_num, value)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row_num, col_num, *value)?;
                    }
                }
            }
        }
    }

    xlsx.save_to_buffer()
}

/// Serializes the workbook model to xlsx bytes.
pub fn write_workbook_to_buffer(workbook: &Workbook) -> Result<Vec<u8>, ServiceError> {
    render(workbook).map_err(|e| {
        error!("❌ Failed to write xlsx workbook: {}", e);
        ServiceError::Internal(format!("Failed to write spreadsheet: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::workbook::Sheet;

    #[test]
    fn writes_a_zip_container() {
        let mut workbook = Workbook::default();
        workbook.append_sheet(Sheet::new(
            "Resumo",
            vec![
                vec![Cell::from("Relatório de presença")],
                vec![],
                vec![Cell::from("Agendadas"), Cell::from(10_i64)],
            ],
        ));

        let bytes = write_workbook_to_buffer(&workbook).unwrap();

        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn invalid_sheet_name_is_internal_error() {
        let mut workbook = Workbook::default();
        workbook.append_sheet(Sheet::new("bad[name]", vec![]));

        let result = write_workbook_to_buffer(&workbook);

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
