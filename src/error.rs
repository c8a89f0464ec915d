use thiserror::Error;

use crate::units::UnitKind;

/// Errors produced by the measurement algebra
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("can't parse {0:?} as a unit value")]
    /// The token is not a number followed or preceded by a known unit tag
    Parse(String),

    #[error("can't combine {lhs} with {rhs} without converting to points first")]
    /// Arithmetic between a relative kind and any other kind
    IncompatibleUnits { lhs: UnitKind, rhs: UnitKind },

    #[error("{lhs} * {rhs} is not a length")]
    /// Multiplying two unit values
    InvalidUnitOperation { lhs: UnitKind, rhs: UnitKind },

    #[error("division of a {0} value by zero")]
    /// Division by a zero scalar or by a unit value that renders to zero points
    DivisionByZero(UnitKind),
}

/// Errors produced by the document registry and the layout helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("page {0} does not exist")]
    /// A page id or index that is not part of the document
    PageMissing(usize),

    #[error("container {0} does not exist")]
    /// A container id that is not part of the document
    ContainerMissing(usize),

    #[error("page {page} already has a container named {name:?}")]
    /// Container names must be unique per page
    DuplicateContainer { page: String, name: String },

    #[error("container {container:?} has {lines} lines, line {index} requested")]
    /// A baseline operation referred to a line the container doesn't have
    LineIndex {
        container: String,
        index: usize,
        lines: usize,
    },

    #[error("page {0:?} has no baseline grid")]
    /// Snapping to a grid on a page that doesn't define one
    NoBaselineGrid(String),

    #[error(transparent)]
    /// A measurement could not be computed
    Unit(#[from] UnitError),
}
