use thiserror::Error;

/// Everything that can be wrong with an input matrix, or with a pair of them.
///
/// `file` is the identifier the matrix was loaded under (usually the path as
/// given on the command line). Line and column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input file `{file}` is empty")]
    EmptyInput { file: String },

    #[error("header of `{file}` names no sites")]
    NoSites { file: String },

    #[error("input files cannot contain empty lines (line {line}, file `{file}`)")]
    EmptyLine { file: String, line: usize },

    #[error("line {line} has {found} columns but the header has {expected} (file `{file}`)")]
    RaggedRow {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("site name at column {column} is empty (file `{file}`)")]
    EmptySiteName { file: String, column: usize },

    #[error("site `{site}` is repeated in file `{file}`")]
    DuplicateSiteName { file: String, site: String },

    #[error("species names cannot be empty (line {line}, file `{file}`)")]
    EmptySpeciesName { file: String, line: usize },

    #[error("species `{species}` is repeated at line {line} (file `{file}`)")]
    DuplicateSpeciesName {
        file: String,
        line: usize,
        species: String,
    },

    #[error(
        "species `{species}` (line {line}) at column {column} has illegal value `{value}`, \
         expected `0` or `1` (file `{file}`)"
    )]
    IllegalPresence {
        file: String,
        line: usize,
        column: usize,
        species: String,
        value: String,
    },

    #[error("species `{species}` (line {line}) is not present in any site (file `{file}`)")]
    SpeciesAbsent {
        file: String,
        line: usize,
        species: String,
    },

    #[error("site `{site}` has no species (file `{file}`)")]
    SiteWithoutSpecies { file: String, site: String },

    #[error(
        "site names in `{primary}` and `{secondary}` do not match \
         (only in first: {only_primary:?}, only in second: {only_secondary:?})"
    )]
    SiteSetMismatch {
        primary: String,
        secondary: String,
        only_primary: Vec<String>,
        only_secondary: Vec<String>,
    },
}

impl ValidationError {
    /// Identifier of the offending input. For a site-set mismatch this is the
    /// secondary matrix, the one being checked against the primary.
    pub fn file(&self) -> &str {
        use ValidationError::*;
        match self {
            EmptyInput { file }
            | NoSites { file }
            | EmptyLine { file, .. }
            | RaggedRow { file, .. }
            | EmptySiteName { file, .. }
            | DuplicateSiteName { file, .. }
            | EmptySpeciesName { file, .. }
            | DuplicateSpeciesName { file, .. }
            | IllegalPresence { file, .. }
            | SpeciesAbsent { file, .. }
            | SiteWithoutSpecies { file, .. } => file,
            SiteSetMismatch { secondary, .. } => secondary,
        }
    }

    /// Line of the offending record, when the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        use ValidationError::*;
        match self {
            EmptyLine { line, .. }
            | RaggedRow { line, .. }
            | EmptySpeciesName { line, .. }
            | DuplicateSpeciesName { line, .. }
            | IllegalPresence { line, .. }
            | SpeciesAbsent { line, .. } => Some(*line),
            // Header problems live on line 1.
            EmptySiteName { .. } | DuplicateSiteName { .. } | NoSites { .. } => Some(1),
            EmptyInput { .. } | SiteWithoutSpecies { .. } | SiteSetMismatch { .. } => None,
        }
    }
}
