use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Matrix;
use crate::error::ValidationError;

/// Characters stripped from both ends of every field.
const QUOTES: [char; 2] = ['"', '\''];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and validate a presence/absence matrix from disk.
///
/// The path, as given, becomes the matrix `source` and is what error messages
/// and report headers refer to.
pub fn load_file(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading matrix file `{}`", path.display()))?;
    let matrix = parse_str(&path.display().to_string(), &text)?;

    log::info!(
        "Loaded `{}`: {} species across {} sites",
        matrix.source,
        matrix.species_count(),
        matrix.site_count()
    );
    Ok(matrix)
}

/// Validate a matrix held in memory.
pub fn parse_str(file: &str, text: &str) -> Result<Matrix, ValidationError> {
    parse_lines(file, text.lines())
}

/// Validate a matrix given line by line (line terminators already removed).
///
/// Layout:
/// ```text
/// ,site_1,site_2,...,site_N
/// species_a,0,1,...,1
/// species_b,1,0,...,0
/// ```
/// The first header cell is ignored. Any violation aborts the whole load.
pub fn parse_lines<'a, I>(file: &str, lines: I) -> Result<Matrix, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter().enumerate().map(|(i, l)| (i + 1, l));

    let (_, header) = lines.next().ok_or_else(|| ValidationError::EmptyInput {
        file: file.to_string(),
    })?;
    let header = split_fields(file, 1, header)?;
    let site_names = parse_header(file, &header)?;
    let columns = header.len();

    let mut species: Vec<String> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut site_species: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); site_names.len()];

    for (line, raw) in lines {
        let fields = split_fields(file, line, raw)?;
        if fields.len() != columns {
            return Err(ValidationError::RaggedRow {
                file: file.to_string(),
                line,
                expected: columns,
                found: fields.len(),
            });
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(ValidationError::EmptySpeciesName {
                file: file.to_string(),
                line,
            });
        }
        if !seen.insert(name.to_string()) {
            return Err(ValidationError::DuplicateSpeciesName {
                file: file.to_string(),
                line,
                species: name.to_string(),
            });
        }

        let id = species.len();
        let mut presences = 0usize;
        for (site, value) in fields[1..].iter().enumerate() {
            match *value {
                "1" => {
                    site_species[site].insert(id);
                    presences += 1;
                }
                "0" => {}
                other => {
                    return Err(ValidationError::IllegalPresence {
                        file: file.to_string(),
                        line,
                        column: site + 2,
                        species: name.to_string(),
                        value: other.to_string(),
                    });
                }
            }
        }
        if presences == 0 {
            return Err(ValidationError::SpeciesAbsent {
                file: file.to_string(),
                line,
                species: name.to_string(),
            });
        }

        species.push(name.to_string());
    }

    if let Some(site) = site_species.iter().position(BTreeSet::is_empty) {
        return Err(ValidationError::SiteWithoutSpecies {
            file: file.to_string(),
            site: site_names[site].clone(),
        });
    }

    Ok(Matrix::from_parts(
        file.to_string(),
        species,
        site_names,
        site_species,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split one raw line into normalised fields, rejecting blank lines.
fn split_fields<'a>(
    file: &str,
    line: usize,
    raw: &'a str,
) -> Result<Vec<&'a str>, ValidationError> {
    let raw = raw.trim_end();
    if raw.is_empty() {
        return Err(ValidationError::EmptyLine {
            file: file.to_string(),
            line,
        });
    }
    Ok(raw.split(',').map(normalise_field).collect())
}

/// Drop surrounding quote characters and trailing whitespace.
fn normalise_field(field: &str) -> &str {
    field.trim_end().trim_matches(QUOTES.as_slice()).trim_end()
}

fn parse_header(file: &str, header: &[&str]) -> Result<Vec<String>, ValidationError> {
    if header.len() < 2 {
        return Err(ValidationError::NoSites {
            file: file.to_string(),
        });
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut names = Vec::with_capacity(header.len() - 1);
    for (idx, name) in header.iter().enumerate().skip(1) {
        if name.is_empty() {
            return Err(ValidationError::EmptySiteName {
                file: file.to_string(),
                column: idx + 1,
            });
        }
        if !seen.insert(*name) {
            return Err(ValidationError::DuplicateSiteName {
                file: file.to_string(),
                site: name.to_string(),
            });
        }
        names.push(name.to_string());
    }
    Ok(names)
}
