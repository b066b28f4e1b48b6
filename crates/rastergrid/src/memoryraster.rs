use crate::{AnyGrid, ElementEncoding, Error, RasterConfigs, RasterHandle, Result};

/// Raster storage kept in memory, one contiguous row-major buffer of values.
/// Values are stored as provided, no quantization to the element encoding is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRaster {
    configs: RasterConfigs,
    data: Vec<f64>,
}

impl MemoryRaster {
    /// Create a raster with all cells set to the nodata value
    pub fn new(configs: RasterConfigs) -> Self {
        let data = vec![configs.nodata; configs.size().cell_count()];
        MemoryRaster { configs, data }
    }

    pub fn from_data(configs: RasterConfigs, data: Vec<f64>) -> Result<Self> {
        if data.len() != configs.size().cell_count() {
            return Err(Error::InvalidArgument(format!(
                "Data length {} does not match the raster size {}",
                data.len(),
                configs.size()
            )));
        }

        Ok(MemoryRaster { configs, data })
    }

    pub fn from_rows<R: AsRef<[f64]>>(encoding: ElementEncoding, nodata: f64, rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::RowLength {
                    row: row_index,
                    expected: columns,
                    actual: row.len(),
                });
            }

            data.extend_from_slice(row);
        }

        Self::from_data(RasterConfigs::new(rows.len(), columns, encoding, nodata), data)
    }

    /// Create a raster with the dimensions and values of the grid.
    /// The encoding is the scalar encoding of the grid element type.
    pub fn from_grid(grid: &AnyGrid, nodata: f64) -> Self {
        let configs = RasterConfigs::new(
            grid.rows(),
            grid.columns(),
            ElementEncoding::for_data_type(grid.data_type()),
            nodata,
        );

        MemoryRaster {
            configs,
            data: grid.to_f64_vec(),
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.configs.rows {
            return None;
        }

        let start = row * self.configs.columns;
        self.data.get(start..start + self.configs.columns)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_raw_parts(self) -> (RasterConfigs, Vec<f64>) {
        (self.configs, self.data)
    }

    fn check_row_index(&self, row: usize) -> Result<()> {
        if row >= self.configs.rows {
            return Err(Error::RowIndexOutOfRange {
                row,
                rows: self.configs.rows,
            });
        }

        Ok(())
    }
}

impl RasterHandle for MemoryRaster {
    fn configs(&self) -> &RasterConfigs {
        &self.configs
    }

    fn get_row_data(&self, row: usize) -> Result<Vec<f64>> {
        self.check_row_index(row)?;
        let start = row * self.configs.columns;
        Ok(self.data[start..start + self.configs.columns].to_vec())
    }

    fn set_row_data(&mut self, row: usize, data: &[f64]) -> Result<()> {
        self.check_row_index(row)?;
        if data.len() != self.configs.columns {
            return Err(Error::RowLength {
                row,
                expected: self.configs.columns,
                actual: data.len(),
            });
        }

        let start = row * self.configs.columns;
        self.data[start..start + self.configs.columns].copy_from_slice(data);
        Ok(())
    }
}
