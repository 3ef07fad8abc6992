//! Table schema for the HYG star catalog

use super::types::*;

pub static HYGDATA: TableSchema = TableSchema {
    name: "hygdata",
    columns: &[
        // Identifiers
        Column::required("id", ColumnType::Integer),
        Column::new("hip", ColumnType::Integer),
        Column::new("hd", ColumnType::Integer),
        Column::new("hr", ColumnType::Integer),
        Column::new("gl", ColumnType::Integer),
        Column::new("bf", ColumnType::Text),
        Column::new("proper", ColumnType::Text),
        // Astrometry (degrees)
        Column::new("ra", ColumnType::Real),
        Column::new("dec", ColumnType::Real),
        Column::new("dist", ColumnType::Real),
        Column::new("pmra", ColumnType::Real),
        Column::new("pmdec", ColumnType::Real),
        Column::new("rv", ColumnType::Real),
        // Photometry
        Column::new("mag", ColumnType::Real),
        Column::new("absmag", ColumnType::Real),
        Column::new("spect", ColumnType::Text),
        Column::new("ci", ColumnType::Real),
        // Cartesian position and velocity
        Column::new("x", ColumnType::Real),
        Column::new("y", ColumnType::Real),
        Column::new("z", ColumnType::Real),
        Column::new("vx", ColumnType::Real),
        Column::new("vy", ColumnType::Real),
        Column::new("vz", ColumnType::Real),
        // Astrometry (radians)
        Column::new("rarad", ColumnType::Real),
        Column::new("decrad", ColumnType::Real),
        Column::new("pmrarad", ColumnType::Real),
        Column::new("pmdecrad", ColumnType::Real),
        // Naming
        Column::new("bayer", ColumnType::Integer),
        Column::new("flam", ColumnType::Integer),
        Column::new("con", ColumnType::Text),
        Column::new("comp", ColumnType::Text),
        Column::new("comp_primary", ColumnType::Text),
        Column::new("base", ColumnType::Text),
        Column::new("lum", ColumnType::Real),
        // Variability
        Column::new("var", ColumnType::Text),
        Column::new("var_min", ColumnType::Real),
        Column::new("var_max", ColumnType::Real),
    ],
    primary_key: "id",
};
