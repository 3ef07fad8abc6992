//! Typed view of one `hygdata` row.

use rusqlite::Row;

/// One star of the HYG catalog. Every field but `id` may be NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CelestialBody {
    pub id: i64,
    pub hip: Option<i64>,
    pub hd: Option<i64>,
    pub hr: Option<i64>,
    pub gl: Option<i64>,
    pub bf: Option<String>,
    pub proper: Option<String>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub dist: Option<f64>,
    pub pmra: Option<f64>,
    pub pmdec: Option<f64>,
    pub rv: Option<f64>,
    pub mag: Option<f64>,
    pub absmag: Option<f64>,
    pub spect: Option<String>,
    pub ci: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub vx: Option<f64>,
    pub vy: Option<f64>,
    pub vz: Option<f64>,
    pub rarad: Option<f64>,
    pub decrad: Option<f64>,
    pub pmrarad: Option<f64>,
    pub pmdecrad: Option<f64>,
    pub bayer: Option<i64>,
    pub flam: Option<i64>,
    pub con: Option<String>,
    pub comp: Option<String>,
    pub comp_primary: Option<String>,
    pub base: Option<String>,
    pub lum: Option<f64>,
    pub var: Option<String>,
    pub var_min: Option<f64>,
    pub var_max: Option<f64>,
}

impl CelestialBody {
    /// Build from a `SELECT *` row. Rows loaded in lenient mode may hold
    /// text in integer columns, which surfaces as `InvalidColumnType`.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            hip: row.get("hip")?,
            hd: row.get("hd")?,
            hr: row.get("hr")?,
            gl: row.get("gl")?,
            bf: row.get("bf")?,
            proper: row.get("proper")?,
            ra: row.get("ra")?,
            dec: row.get("dec")?,
            dist: row.get("dist")?,
            pmra: row.get("pmra")?,
            pmdec: row.get("pmdec")?,
            rv: row.get("rv")?,
            mag: row.get("mag")?,
            absmag: row.get("absmag")?,
            spect: row.get("spect")?,
            ci: row.get("ci")?,
            x: row.get("x")?,
            y: row.get("y")?,
            z: row.get("z")?,
            vx: row.get("vx")?,
            vy: row.get("vy")?,
            vz: row.get("vz")?,
            rarad: row.get("rarad")?,
            decrad: row.get("decrad")?,
            pmrarad: row.get("pmrarad")?,
            pmdecrad: row.get("pmdecrad")?,
            bayer: row.get("bayer")?,
            flam: row.get("flam")?,
            con: row.get("con")?,
            comp: row.get("comp")?,
            comp_primary: row.get("comp_primary")?,
            base: row.get("base")?,
            lum: row.get("lum")?,
            var: row.get("var")?,
            var_min: row.get("var_min")?,
            var_max: row.get("var_max")?,
        })
    }
}
