//! Disease-keyed reference tables: description, precautions, medications,
//! diets, workouts.
//!
//! Loaded once at startup from externally curated CSVs and immutable
//! afterwards. Rows are grouped by disease name (exact, case-sensitive
//! match) at load time so per-request lookups are O(1) map reads, not
//! table scans.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("reference table {table}: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Description")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrecautionRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Precaution_1")]
    pub precaution_1: String,
    #[serde(rename = "Precaution_2")]
    pub precaution_2: String,
    #[serde(rename = "Precaution_3")]
    pub precaution_3: String,
    #[serde(rename = "Precaution_4")]
    pub precaution_4: String,
}

/// One row per disease; the field holds a comma-separated list.
#[derive(Debug, Clone, Deserialize)]
pub struct MedicationRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Medication")]
    pub medication: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DietRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Diet")]
    pub diet: String,
}

/// The workout table was curated with lowercase headers; kept as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutRow {
    #[serde(rename = "disease")]
    pub disease: String,
    #[serde(rename = "workout")]
    pub workout: String,
}

/// All five tables, grouped by disease name.
#[derive(Debug)]
pub struct ReferenceTables {
    descriptions: HashMap<String, Vec<DescriptionRow>>,
    precautions: HashMap<String, Vec<PrecautionRow>>,
    medications: HashMap<String, Vec<MedicationRow>>,
    diets: HashMap<String, Vec<DietRow>>,
    workouts: HashMap<String, Vec<WorkoutRow>>,
}

impl ReferenceTables {
    /// Load every table from `dir`. Load-all-or-fail: one unreadable or
    /// malformed file aborts startup rather than serving partial data.
    pub fn load(dir: &Path) -> Result<Self, ReferenceError> {
        let tables = Self::from_rows(
            load_table(dir, "description.csv")?,
            load_table(dir, "precautions.csv")?,
            load_table(dir, "medications.csv")?,
            load_table(dir, "diets.csv")?,
            load_table(dir, "workout.csv")?,
        );
        tracing::info!(
            dir = %dir.display(),
            diseases = tables.medications.len(),
            "reference tables loaded"
        );
        Ok(tables)
    }

    /// Build the grouped tables from already-parsed rows.
    pub fn from_rows(
        descriptions: Vec<DescriptionRow>,
        precautions: Vec<PrecautionRow>,
        medications: Vec<MedicationRow>,
        diets: Vec<DietRow>,
        workouts: Vec<WorkoutRow>,
    ) -> Self {
        Self {
            descriptions: group_by(descriptions, |r| r.disease.clone()),
            precautions: group_by(precautions, |r| r.disease.clone()),
            medications: group_by(medications, |r| r.disease.clone()),
            diets: group_by(diets, |r| r.disease.clone()),
            workouts: group_by(workouts, |r| r.disease.clone()),
        }
    }

    pub fn descriptions(&self, disease: &str) -> &[DescriptionRow] {
        rows(&self.descriptions, disease)
    }

    pub fn precautions(&self, disease: &str) -> &[PrecautionRow] {
        rows(&self.precautions, disease)
    }

    pub fn medications(&self, disease: &str) -> &[MedicationRow] {
        rows(&self.medications, disease)
    }

    pub fn diets(&self, disease: &str) -> &[DietRow] {
        rows(&self.diets, disease)
    }

    pub fn workouts(&self, disease: &str) -> &[WorkoutRow] {
        rows(&self.workouts, disease)
    }
}

fn rows<'a, R>(table: &'a HashMap<String, Vec<R>>, disease: &str) -> &'a [R] {
    table.get(disease).map(Vec::as_slice).unwrap_or(&[])
}

fn group_by<R>(rows: Vec<R>, key: impl Fn(&R) -> String) -> HashMap<String, Vec<R>> {
    let mut grouped: HashMap<String, Vec<R>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

fn load_table<R>(dir: &Path, table: &'static str) -> Result<Vec<R>, ReferenceError>
where
    R: serde::de::DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(dir.join(table))
        .map_err(|source| ReferenceError::Table { table, source })?;
    reader
        .deserialize()
        .map(|record| record.map_err(|source| ReferenceError::Table { table, source }))
        .collect()
}
